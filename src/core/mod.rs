pub mod error;
pub mod types;
pub mod value;

// 错误和结果类型
pub use error::{
    CompileError, CompileResult, ContextError, ContextResult, PartitionError, PartitionResult,
    RenderError, RenderResult,
};

// 核心数据类型
pub use value::*;

// 表达式系统类型
pub use types::expression::{Expression, PathSegment};

pub use types::graph::EdgeDirection;

pub use types::operators::{BooleanOperator, ComparisonOperator};

pub use types::variable::{JoinPath, Variable, VariableKind};
