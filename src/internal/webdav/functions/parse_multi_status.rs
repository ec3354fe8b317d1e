use quick_xml::de::from_str;
use thiserror::Error;

use crate::internal::webdav::raw_xml::raw_entry::MultiStatus;

/// multi-status 文档反序列化错误
#[derive(Debug, Error)]
pub enum MultiStatusError {
    #[error("multi-status XML 解析失败: {0}")]
    Xml(#[from] quick_xml::DeError),
}

/// 把整份 PROPFIND 响应文本解析成结构化树
///
/// 只负责反序列化，不做遍历和聚合；单条 response 到记录的转换见
/// `to_webdav_record`，调用方自行决定如何跳过解析失败的条目。
pub fn parse_multi_status(xml_text: &str) -> Result<MultiStatus, MultiStatusError> {
    let multi_status: MultiStatus = from_str(xml_text)?;
    Ok(multi_status)
}
