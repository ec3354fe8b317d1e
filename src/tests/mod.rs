//! 测试模块入口：公共 XML 夹具逻辑在 `lib` 子模块，用例在 `internal`。

#[cfg(test)]
pub use lib::*;
