//! Value 模块 - 谓词字面量的值类型

pub mod types;

pub use types::*;
