use crate::internal::record::functions::normalize_path::normalize_path;
use crate::internal::record::functions::parse_timestamp::parse_rfc1123;
use crate::internal::record::structs::webdav_record::WebdavRecord;
use crate::internal::webdav::raw_xml::raw_entry::{Prop, Response};

pub trait ToWebdavRecord {
    fn to_webdav_record(&self, base_path: Option<&str>) -> Option<WebdavRecord>;
}

impl ToWebdavRecord for Response {
    /// 把一条 `<response>` 解析成归一化记录
    ///
    /// 两级失败策略：href 或 getlastmodified 缺失/坏值时整条记录返回 None；
    /// 其余属性各自降级到默认值，不影响记录的产出。
    fn to_webdav_record(&self, base_path: Option<&str>) -> Option<WebdavRecord> {
        let raw_path = self.href.as_deref()?;

        // 属性容器取第一个 propstat，没有 propstat 等价于所有属性缺失
        let empty_prop = Prop::default();
        let prop = self
            .propstats
            .first()
            .map(|propstat| &propstat.prop)
            .unwrap_or(&empty_prop);

        // 时间缺失或解析失败的记录不会被构造，优先级高于其他字段的默认值
        let last_modified = parse_rfc1123(prop.last_modified.as_deref()?)?;

        // 通过 resourcetype 判断是否为目录
        let is_directory = prop
            .resource_type
            .as_ref()
            .and_then(|resource_type| resource_type.collection.as_ref())
            .is_some();

        // 目录可能没有 getcontentlength，统一按 0；坏值同样按 0
        let size = if is_directory {
            0
        } else {
            prop.content_length
                .as_deref()
                .and_then(|text| text.trim().parse::<u64>().ok())
                .unwrap_or(0)
        };

        // fileid 和 etag 可选，缺失时落到空字符串
        let id = prop.file_id.clone().unwrap_or_default();
        let etag = prop.etag.clone().unwrap_or_default();

        let path = normalize_path(raw_path, base_path);

        Some(WebdavRecord::new(
            path,
            id,
            is_directory,
            last_modified,
            size,
            etag,
        ))
    }
}
