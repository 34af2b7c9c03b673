//! 表达式构造方法

use crate::core::types::expression::def::{Expression, PathSegment};
use crate::core::types::operators::{BooleanOperator, ComparisonOperator};
use crate::core::Value;

impl Expression {
    /// 创建字面量表达式
    pub fn literal(value: impl Into<Value>) -> Self {
        Expression::Literal(value.into())
    }

    /// 创建布尔字面量
    pub fn boolean(value: bool) -> Self {
        Expression::Literal(Value::Bool(value))
    }

    /// 创建单层列引用 `table.column`
    ///
    /// 列名为 `*` 时表示整个文档
    pub fn column(table: impl Into<String>, column: impl Into<String>) -> Self {
        let column = column.into();
        let path = if column == "*" {
            Vec::new()
        } else {
            vec![PathSegment::Member(column)]
        };
        Expression::ColumnRef {
            table: table.into(),
            path,
        }
    }

    /// 创建任意路径的列引用
    pub fn column_path(table: impl Into<String>, path: Vec<PathSegment>) -> Self {
        Expression::ColumnRef {
            table: table.into(),
            path,
        }
    }

    /// 创建整文档引用
    pub fn document(table: impl Into<String>) -> Self {
        Expression::ColumnRef {
            table: table.into(),
            path: Vec::new(),
        }
    }

    /// 用括号包裹表达式
    pub fn parenthesis(inner: Expression) -> Self {
        Expression::Parenthesis(Box::new(inner))
    }

    /// 创建比较表达式
    pub fn compare(left: Expression, op: ComparisonOperator, right: Expression) -> Self {
        Expression::Comparison {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// 创建相等比较
    pub fn eq(left: Expression, right: Expression) -> Self {
        Self::compare(left, ComparisonOperator::Equal, right)
    }

    /// 创建布尔二元表达式
    pub fn boolean_binary(left: Expression, op: BooleanOperator, right: Expression) -> Self {
        Expression::BooleanBinary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    /// 创建函数调用
    pub fn function(name: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::Function {
            name: name.into(),
            args,
        }
    }

    /// 将若干条件按 OR 串联
    ///
    /// 输入为空时返回 `None`
    pub fn disjunction(conditions: impl IntoIterator<Item = Expression>) -> Option<Self> {
        conditions
            .into_iter()
            .reduce(|acc, next| Self::boolean_binary(acc, BooleanOperator::Or, next))
    }

    /// 把新条件合并进已有谓词
    ///
    /// 已有谓词为空时直接采用新条件；否则两侧都包一层括号再连接，
    /// 不做任何扁平化，保证结果与新条件内部结构无关地保持优先级。
    pub fn conjoin(
        existing: Option<Expression>,
        condition: Expression,
        conjunction: BooleanOperator,
    ) -> Self {
        match existing {
            None => condition,
            Some(existing) => Self::boolean_binary(
                Self::parenthesis(existing),
                conjunction,
                Self::parenthesis(condition),
            ),
        }
    }
}
