//! 表达式类型定义
//!
//! 本模块定义谓词树使用的统一表达式类型 `Expression` 枚举。

use crate::core::types::operators::{BooleanOperator, ComparisonOperator};
use crate::core::Value;
use serde::{Deserialize, Serialize};

/// 列路径片段
///
/// 同一个列引用在不同方言中写法不同，因此以结构化片段保存，
/// 由各方言的渲染器决定具体文本。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathSegment {
    /// 点号成员访问：`alias.name`
    Member(String),
    /// 方括号下标访问：`alias["name"]`
    Key(String),
    /// 数组展开：`alias.name.*`
    Wildcard,
}

impl PathSegment {
    /// 成员或下标的名称，展开片段没有名称
    pub fn name(&self) -> Option<&str> {
        match self {
            PathSegment::Member(name) | PathSegment::Key(name) => Some(name),
            PathSegment::Wildcard => None,
        }
    }
}

/// 谓词表达式
///
/// 闭合的标签树：叶子为字面量、列引用，复合节点为括号、比较、
/// 布尔二元运算和函数调用。树只通过显式的重写遍历修改，
/// 重写前调用方必须先 `clone` 出副本。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// 字面量值
    Literal(Value),

    /// 列引用
    ///
    /// `path` 为空表示引用 `table` 绑定的整个文档
    ColumnRef {
        table: String,
        path: Vec<PathSegment>,
    },

    /// 显式括号
    Parenthesis(Box<Expression>),

    /// 比较运算
    Comparison {
        left: Box<Expression>,
        op: ComparisonOperator,
        right: Box<Expression>,
    },

    /// 布尔二元运算
    BooleanBinary {
        left: Box<Expression>,
        op: BooleanOperator,
        right: Box<Expression>,
    },

    /// 函数调用
    Function {
        name: String,
        args: Vec<Expression>,
    },
}
