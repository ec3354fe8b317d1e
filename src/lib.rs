/// 内部导出的模块
mod internal;

#[cfg(test)]
mod tests;

/// 对外提供 multi-status 原始 XML 模型与单条记录的解析能力
pub mod webdav {
    pub mod structs {
        pub use crate::internal::webdav::raw_xml::raw_entry::*;
    }

    pub mod traits {
        pub use crate::internal::webdav::raw_xml::impl_to_record::*;
    }

    pub mod functions {
        pub use crate::internal::webdav::functions::parse_multi_status::*;
    }
}

/// 归一化后的记录模型及其纯函数工具
pub mod record {
    use crate::internal;
    pub use internal::record::functions::normalize_path::*;
    pub use internal::record::functions::parse_timestamp::*;
    pub use internal::record::structs::webdav_record::*;
}
