use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// 一条 multi-status 响应解析出的远程资源记录，构造后不可变
///
/// 字段全部私有，只暴露只读访问器；file_name / extension / name
/// 是派生视图，每次访问都从 path 和 is_directory 现算，不落盘。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WebdavRecord {
    /// 归一化后的相对路径：已解码、已剥掉 base_path 重叠、无前导 `/`
    path: String,
    /// 服务端分配的资源 id，缺失时为空字符串
    id: String,
    /// 是否目录（resourcetype 含 collection）
    is_directory: bool,
    /// 最后修改时间，解析失败的记录根本不会被构造出来
    last_modified: DateTime<FixedOffset>,
    /// 文件大小（字节），目录恒为 0
    size: u64,
    /// 实体标签，缺失时为空字符串
    etag: String,
}

impl WebdavRecord {
    pub fn new(
        path: String,
        id: String,
        is_directory: bool,
        last_modified: DateTime<FixedOffset>,
        size: u64,
        etag: String,
    ) -> Self {
        Self {
            path,
            id,
            is_directory,
            last_modified,
            // 目录不携带内容长度
            size: if is_directory { 0 } else { size },
            etag,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    pub fn last_modified(&self) -> DateTime<FixedOffset> {
        self.last_modified
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// 含扩展名的文件名：path 的最后一段，目录路径的尾部 `/` 不参与
    pub fn file_name(&self) -> &str {
        self.path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("")
    }

    /// 扩展名：file_name 最后一个 `.` 之后的部分，没有 `.` 时为空字符串
    pub fn extension(&self) -> &str {
        match self.file_name().rsplit_once('.') {
            Some((_, extension)) => extension,
            None => "",
        }
    }

    /// 去掉扩展名的名字；目录直接取 file_name
    pub fn name(&self) -> &str {
        let file_name = self.file_name();
        if self.is_directory {
            return file_name;
        }
        match file_name.rsplit_once('.') {
            Some((stem, _)) => stem,
            None => file_name,
        }
    }
}

impl fmt::Display for WebdavRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WebdavRecord(path: {}, id: {}, is_directory: {}, last_modified: {}, size: {}, etag: {})",
            self.path,
            self.id,
            self.is_directory,
            self.last_modified.to_rfc2822(),
            self.size,
            self.etag
        )
    }
}
