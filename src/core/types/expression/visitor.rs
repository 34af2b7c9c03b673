//! 统一的表达式访问者接口
//!
//! 本模块提供两类访问者接口：
//! - `ExpressionVisitor`: 只读遍历，渲染器通过它把谓词树转换为查询文本
//! - `ExpressionRewriter`: 原地重写，各重写遍历通过它修改谓词树副本
//!
//! 两者的分发都是对 `Expression` 的穷尽匹配，新增表达式变体时
//! 必须同时补齐每个访问者的处理规则，否则无法编译。

use crate::core::types::expression::def::{Expression, PathSegment};
use crate::core::types::operators::{BooleanOperator, ComparisonOperator};
use crate::core::Value;

/// 只读表达式访问者 trait
pub trait ExpressionVisitor {
    /// 访问者结果类型
    type Result;

    /// 主入口点 - 访问表达式
    fn visit_expression(&mut self, expression: &Expression) -> Self::Result {
        match expression {
            Expression::Literal(value) => self.visit_literal(value),
            Expression::ColumnRef { table, path } => self.visit_column_ref(table, path),
            Expression::Parenthesis(inner) => self.visit_parenthesis(inner),
            Expression::Comparison { left, op, right } => self.visit_comparison(left, *op, right),
            Expression::BooleanBinary { left, op, right } => {
                self.visit_boolean_binary(left, *op, right)
            }
            Expression::Function { name, args } => self.visit_function(name, args),
        }
    }

    /// 访问字面量
    fn visit_literal(&mut self, value: &Value) -> Self::Result;

    /// 访问列引用
    fn visit_column_ref(&mut self, table: &str, path: &[PathSegment]) -> Self::Result;

    /// 访问括号
    fn visit_parenthesis(&mut self, inner: &Expression) -> Self::Result;

    /// 访问比较运算
    fn visit_comparison(
        &mut self,
        left: &Expression,
        op: ComparisonOperator,
        right: &Expression,
    ) -> Self::Result;

    /// 访问布尔二元运算
    fn visit_boolean_binary(
        &mut self,
        left: &Expression,
        op: BooleanOperator,
        right: &Expression,
    ) -> Self::Result;

    /// 访问函数调用
    fn visit_function(&mut self, name: &str, args: &[Expression]) -> Self::Result;
}

/// 原地重写访问者 trait
///
/// 默认实现做深度优先遍历，不修改任何节点。实现者只需覆盖关心的钩子。
pub trait ExpressionRewriter {
    /// 主入口点 - 重写表达式
    fn rewrite(&mut self, expression: &mut Expression) {
        self.rewrite_children(expression);
        self.rewrite_node(expression);
    }

    /// 先序处理子节点
    fn rewrite_children(&mut self, expression: &mut Expression) {
        match expression {
            Expression::Literal(_) => {}
            Expression::ColumnRef { table, path } => self.rewrite_column_ref(table, path),
            Expression::Parenthesis(inner) => self.rewrite(inner),
            Expression::Comparison { left, right, .. }
            | Expression::BooleanBinary { left, right, .. } => {
                self.rewrite(left);
                self.rewrite(right);
            }
            Expression::Function { args, .. } => {
                for arg in args.iter_mut() {
                    self.rewrite(arg);
                }
            }
        }
    }

    /// 重写列引用
    fn rewrite_column_ref(&mut self, _table: &mut String, _path: &mut Vec<PathSegment>) {}

    /// 在子节点处理完之后重写当前节点，可替换整个节点
    fn rewrite_node(&mut self, _expression: &mut Expression) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ColumnCounter {
        count: usize,
    }

    impl ExpressionVisitor for ColumnCounter {
        type Result = ();

        fn visit_literal(&mut self, _value: &Value) {}

        fn visit_column_ref(&mut self, _table: &str, _path: &[PathSegment]) {
            self.count += 1;
        }

        fn visit_parenthesis(&mut self, inner: &Expression) {
            self.visit_expression(inner);
        }

        fn visit_comparison(&mut self, left: &Expression, _op: ComparisonOperator, right: &Expression) {
            self.visit_expression(left);
            self.visit_expression(right);
        }

        fn visit_boolean_binary(&mut self, left: &Expression, _op: BooleanOperator, right: &Expression) {
            self.visit_expression(left);
            self.visit_expression(right);
        }

        fn visit_function(&mut self, _name: &str, args: &[Expression]) {
            for arg in args {
                self.visit_expression(arg);
            }
        }
    }

    struct RenameTable;

    impl ExpressionRewriter for RenameTable {
        fn rewrite_column_ref(&mut self, table: &mut String, _path: &mut Vec<PathSegment>) {
            if table == "N_0" {
                *table = "N_1".to_string();
            }
        }
    }

    fn sample() -> Expression {
        Expression::conjoin(
            Some(Expression::eq(Expression::column("N_0", "name"), Expression::literal("marko"))),
            Expression::function("IS_DEFINED", vec![Expression::column("N_0", "age")]),
            BooleanOperator::And,
        )
    }

    #[test]
    fn test_visitor_reaches_every_column() {
        let mut counter = ColumnCounter { count: 0 };
        counter.visit_expression(&sample());
        assert_eq!(counter.count, 2);
    }

    #[test]
    fn test_rewriter_mutates_in_place() {
        let mut expr = sample();
        RenameTable.rewrite(&mut expr);
        assert_eq!(
            expr,
            Expression::conjoin(
                Some(Expression::eq(Expression::column("N_1", "name"), Expression::literal("marko"))),
                Expression::function("IS_DEFINED", vec![Expression::column("N_1", "age")]),
                BooleanOperator::And,
            )
        );
    }
}
