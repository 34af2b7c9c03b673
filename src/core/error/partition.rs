//! 分区谓词错误类型

use thiserror::Error;

/// 分区操作结果类型别名
pub type PartitionResult<T> = Result<T, PartitionError>;

/// 分区错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PartitionError {
    #[error("分区方法 {method} 尚未实现 {compare} 比较")]
    NotImplemented {
        method: &'static str,
        compare: &'static str,
    },

    #[error("并行度必须在 1 到 {max} 之间，实际为 {parallelism}")]
    InvalidParallelism { parallelism: usize, max: usize },

    #[error("分区键不能为空")]
    EmptyKey,
}
