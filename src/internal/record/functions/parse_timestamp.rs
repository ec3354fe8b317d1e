use chrono::{DateTime, FixedOffset};

/// 按固定的 RFC 1123 风格格式解析 `getlastmodified` 文本，
/// 例如 `Wed, 21 Oct 2015 07:28:00 GMT`
///
/// HTTP-date 是 RFC 2822 的子集，这里逐次无状态解析，不维护全局 formatter。
pub fn parse_rfc1123(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(text.trim()).ok()
}
