//! 查询渲染错误类型
//!
//! 涵盖文档查询 IR 渲染为方言文本过程中的错误

use thiserror::Error;

/// 渲染结果类型别名
pub type RenderResult<T> = Result<T, RenderError>;

/// 渲染错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("SELECT 子句为空，没有任何可选择的内容")]
    EmptyProjection,

    #[error("`*` 不能与 AS 一起使用")]
    WildcardWithAlias,

    #[error("`*` 只能单独出现在 SELECT 子句中")]
    WildcardNotAlone,

    #[error("不支持的 SELECT 子句表达式: {0}")]
    UnsupportedExpression(String),

    #[error("查询缺少节点别名和边别名")]
    MissingAlias,

    #[error("查询尚未设置 WHERE 谓词")]
    MissingPredicate,

    #[error("JsonServer 查询需要集合名称")]
    MissingCollectionName,

    #[error("{dialect} 方言不支持分区谓词")]
    PartitionUnsupported { dialect: &'static str },

    #[error("分区谓词错误: {0}")]
    Partition(String),
}
