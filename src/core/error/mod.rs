//! 统一错误处理系统 for GraphView
//!
//! ## 设计理念
//!
//! 1. **按层划分**：遍历上下文、渲染、分区各自一个错误枚举
//! 2. **分层转换**：各层错误使用 `#[from]` 注解自动转换为 `CompileError`
//! 3. **统一接口**：`CompileResult<T>` 提供统一的返回类型，简化错误传播
//!
//! 编译器是纯函数，所有错误都是调用约定违例或不支持的构造，不做重试。

use thiserror::Error;

pub mod context;
pub mod partition;
pub mod query;

pub use context::{ContextError, ContextResult};
pub use partition::{PartitionError, PartitionResult};
pub use query::{RenderError, RenderResult};

/// 统一的编译错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("遍历上下文错误: {0}")]
    Context(#[from] ContextError),

    #[error("渲染错误: {0}")]
    Render(#[from] RenderError),

    #[error("分区错误: {0}")]
    Partition(#[from] PartitionError),

    #[error("序列化错误: {0}")]
    Serialization(String),

    #[error("配置错误: {0}")]
    Config(String),
}

/// 统一的结果类型
pub type CompileResult<T> = Result<T, CompileError>;

// ==================== 外部错误转换实现 ====================

impl From<serde_json::Error> for CompileError {
    fn from(err: serde_json::Error) -> Self {
        CompileError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for CompileError {
    fn from(err: toml::de::Error) -> Self {
        CompileError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for CompileError {
    fn from(err: toml::ser::Error) -> Self {
        CompileError::Config(err.to_string())
    }
}

impl From<std::io::Error> for CompileError {
    fn from(err: std::io::Error) -> Self {
        CompileError::Config(err.to_string())
    }
}

impl From<PartitionError> for RenderError {
    fn from(err: PartitionError) -> Self {
        RenderError::Partition(err.to_string())
    }
}
