// 核心类型系统模块
//
// 包含编译器的核心类型定义：谓词表达式、操作符、图结构类型

pub mod expression;
pub mod graph;
pub mod operators;
pub mod variable;

pub use expression::{Expression, PathSegment};
pub use graph::EdgeDirection;
pub use operators::{BooleanOperator, ComparisonOperator, Operator};
pub use variable::{JoinPath, Variable, VariableKind};
