//! 遍历上下文错误类型
//!
//! 涵盖遍历步骤应用与逻辑上下文降级过程中的调用约定违例

use thiserror::Error;

use crate::core::types::VariableKind;

/// 上下文操作结果类型别名
pub type ContextResult<T> = Result<T, ContextError>;

/// 遍历上下文错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContextError {
    #[error("步骤 {step} 需要当前变量，但上下文中还没有任何变量")]
    NoCurrentVariable { step: &'static str },

    #[error("步骤 {step} 需要{expected}变量，但当前变量 {alias} 是{found}")]
    WrongVariableKind {
        step: &'static str,
        expected: &'static str,
        alias: String,
        found: VariableKind,
    },

    #[error("未声明的变量: {0}")]
    UnknownVariable(String),

    #[error("边 {edge} 不在任何连接路径上")]
    DetachedEdge { edge: String },

    #[error("无法用单次读取表达双向跳转: {edge}")]
    UnsupportedHop { edge: String },

    #[error("变量 {alias} 上的过滤条件无法并入以 {fetch} 结尾的单次读取，需先单独读取 {alias}")]
    UnrenderedPredicate { alias: String, fetch: String },
}
