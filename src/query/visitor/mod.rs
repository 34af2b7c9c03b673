//! 谓词重写遍历模块
//!
//! 渲染前作用于谓词副本的重写遍历。执行顺序由各方言渲染器固定：
//! - DocumentDB: 布尔字面量 -> 顶点属性规范化 -> 方括号标识符
//! - JsonServer: 布尔字面量 -> 数组展开

mod array_unfold_visitor;
mod boolean_literal_visitor;
mod bracket_identifier_visitor;
mod normalize_node_property_visitor;

pub use array_unfold_visitor::ArrayUnfoldVisitor;
pub use boolean_literal_visitor::BooleanLiteralVisitor;
pub use bracket_identifier_visitor::BracketIdentifierVisitor;
pub use normalize_node_property_visitor::{NormalizeNodePropertyVisitor, PropertyJoin};

/// 多值属性元素中保存实际值的字段
pub const VALUE_FIELD: &str = "_value";
