use crate::record::{WebdavRecord, parse_rfc1123};

fn record(path: &str, is_directory: bool) -> WebdavRecord {
    WebdavRecord::new(
        path.to_string(),
        String::new(),
        is_directory,
        parse_rfc1123("Wed, 21 Oct 2015 07:28:00 GMT").unwrap(),
        0,
        String::new(),
    )
}

#[test]
fn file_views() {
    let file = record("docs/report.pdf", false);
    assert_eq!(file.file_name(), "report.pdf");
    assert_eq!(file.extension(), "pdf");
    assert_eq!(file.name(), "report");
}

#[test]
fn directory_views() {
    let dir = record("docs", true);
    assert_eq!(dir.file_name(), "docs");
    assert_eq!(dir.extension(), "");
    assert_eq!(dir.name(), "docs");
}

#[test]
fn directory_trailing_separator_is_ignored() {
    let dir = record("Photos/2021/", true);
    assert_eq!(dir.file_name(), "2021");
    assert_eq!(dir.name(), "2021");
}

#[test]
fn file_without_extension() {
    let file = record("README", false);
    assert_eq!(file.file_name(), "README");
    assert_eq!(file.extension(), "");
    assert_eq!(file.name(), "README");
}

#[test]
fn only_last_dot_counts_as_extension() {
    let file = record("backups/archive.tar.gz", false);
    assert_eq!(file.file_name(), "archive.tar.gz");
    assert_eq!(file.extension(), "gz");
    assert_eq!(file.name(), "archive.tar");
}
