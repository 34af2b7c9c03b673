//! 谓词树到查询文本的转换
//!
//! 括号完全由树中的 `Parenthesis` 节点决定，不按优先级推导。
//! 两种方言只在字符串引号和路径写法上不同。

use crate::core::types::expression::{Expression, ExpressionVisitor, PathSegment};
use crate::core::types::operators::{BooleanOperator, ComparisonOperator, Operator};
use crate::core::value::Value;
use crate::query::render::Dialect;
use crate::utils::string_utils::{double_quoted, is_plain_identifier, single_quoted};

#[derive(Debug, Clone, Copy)]
pub struct QueryStringVisitor {
    dialect: Dialect,
}

impl QueryStringVisitor {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn invoke(&mut self, expression: &Expression) -> String {
        self.visit_expression(expression)
    }

    fn quote(&self, s: &str) -> String {
        match self.dialect {
            Dialect::DocumentDb => double_quoted(s),
            Dialect::JsonServer => single_quoted(s),
        }
    }
}

impl ExpressionVisitor for QueryStringVisitor {
    type Result = String;

    fn visit_literal(&mut self, value: &Value) -> String {
        match value {
            Value::String(s) => self.quote(s),
            other => other.to_plain_string(),
        }
    }

    fn visit_column_ref(&mut self, table: &str, path: &[PathSegment]) -> String {
        let mut text = table.to_string();
        for segment in path {
            match segment {
                // 不是普通标识符的属性名只能用下标写法
                PathSegment::Member(name) if is_plain_identifier(name) => {
                    text.push('.');
                    text.push_str(name);
                }
                PathSegment::Member(name) | PathSegment::Key(name) => {
                    // JsonServer 的下标前也要有点号：N_0.["name"]
                    if self.dialect == Dialect::JsonServer {
                        text.push('.');
                    }
                    text.push('[');
                    text.push_str(&double_quoted(name));
                    text.push(']');
                }
                PathSegment::Wildcard => text.push_str(".*"),
            }
        }
        text
    }

    fn visit_parenthesis(&mut self, inner: &Expression) -> String {
        format!("({})", self.visit_expression(inner))
    }

    fn visit_comparison(
        &mut self,
        left: &Expression,
        op: ComparisonOperator,
        right: &Expression,
    ) -> String {
        let left = self.visit_expression(left);
        let right = self.visit_expression(right);
        format!("{} {} {}", left, op.name(), right)
    }

    fn visit_boolean_binary(
        &mut self,
        left: &Expression,
        op: BooleanOperator,
        right: &Expression,
    ) -> String {
        let left = self.visit_expression(left);
        let right = self.visit_expression(right);
        format!("{} {} {}", left, op.name(), right)
    }

    fn visit_function(&mut self, name: &str, args: &[Expression]) -> String {
        let args: Vec<String> = args.iter().map(|arg| self.visit_expression(arg)).collect();
        format!("{}({})", name, args.join(", "))
    }
}
