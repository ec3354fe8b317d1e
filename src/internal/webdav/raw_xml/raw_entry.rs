use serde::{Deserialize, Serialize};

/// 对应 WebDAV 响应 XML 顶层的 `<D:multistatus>` 节点
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MultiStatus {
    /// `<D:response>` 节点列表，每个 response 表示一个资源（文件或目录）
    #[serde(rename = "response", default)]
    pub responses: Vec<Response>,
}

/// 对应单个 `<D:response>` 节点
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Response {
    /// `<D:href>`：资源路径（URL 编码，需要解码才能显示原始文件名）
    #[serde(default)]
    pub href: Option<String>,
    /// `<D:propstat>`：资源属性集和对应状态码的列表
    #[serde(rename = "propstat", default)]
    pub propstats: Vec<PropStat>,
}

/// 对应 `<D:propstat>` 节点：一个属性集 + 对应的 HTTP 状态
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PropStat {
    /// `<D:prop>`：资源的具体属性
    #[serde(default)]
    pub prop: Prop,
    /// `<D:status>`：该属性集对应的 HTTP 状态，如 "HTTP/1.1 200 OK"
    #[serde(default)]
    pub status: Option<String>,
}

/// 对应 `<D:prop>` 节点，只保留记录解析需要的属性
///
/// `getlastmodified` 和 `getcontentlength` 保留原始文本，
/// 由记录解析器按各自的策略解析，坏值不会让整份文档反序列化失败。
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Prop {
    /// `<getlastmodified>`：最后修改时间（HTTP-date 格式文本）
    #[serde(rename = "getlastmodified")]
    pub last_modified: Option<String>,

    /// `<resourcetype>`：资源类型（文件/目录）
    #[serde(rename = "resourcetype")]
    pub resource_type: Option<ResourceType>,

    /// `<getcontentlength>`：文件大小（字节）文本，目录一般没有此字段
    #[serde(rename = "getcontentlength")]
    pub content_length: Option<String>,

    /// `<fileid>`：服务端分配的资源标识
    #[serde(rename = "fileid")]
    pub file_id: Option<String>,

    /// `<getetag>`：实体标签（文件内容的标识符，可用于缓存或变更检测）
    #[serde(rename = "getetag")]
    pub etag: Option<String>,
}

/// `<resourcetype>` 节点
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ResourceType {
    /// `<collection/>` 存在表示是目录，否则是文件
    #[serde(rename = "collection")]
    pub collection: Option<EmptyElement>,
}

/// 空元素的占位结构，例如 `<collection/>`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EmptyElement {}
