//! 谓词表达式类型
//!
//! 本模块定义编译器使用的谓词树 `Expression` 及其访问者接口。
//!
//! ## 变体说明
//!
//! | 变体 | 用途 |
//! |------|------|
//! | `Literal` | 字面量值 |
//! | `ColumnRef` | 列引用（别名 + 路径） |
//! | `Parenthesis` | 显式括号 |
//! | `Comparison` | 比较运算 |
//! | `BooleanBinary` | AND / OR |
//! | `Function` | 函数调用 |
//!
//! ## 使用示例
//!
//! ```rust
//! use graphview::core::types::expression::Expression;
//! use graphview::core::types::operators::BooleanOperator;
//!
//! let age = Expression::eq(Expression::column("N_0", "age"), Expression::literal(29));
//! let predicate = Expression::conjoin(Some(Expression::boolean(true)), age, BooleanOperator::And);
//! assert!(predicate.conjunctions_parenthesized());
//! ```

mod construction;
mod def;
mod inspection;
pub mod visitor;

pub use def::{Expression, PathSegment};
pub use visitor::{ExpressionRewriter, ExpressionVisitor};
