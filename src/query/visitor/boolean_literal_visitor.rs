//! BooleanLiteralVisitor - 规范化布尔字面量的重写遍历
//!
//! 主要功能：
//! - 把两侧都是字面量的比较折叠成布尔字面量
//! - 折叠后的常量由各方言统一输出为 `true` / `false`

use crate::core::types::expression::{Expression, ExpressionRewriter};
use crate::core::types::operators::ComparisonOperator;
use crate::core::Value;

/// 布尔字面量规范化访问器
#[derive(Debug, Default)]
pub struct BooleanLiteralVisitor {
    /// 已折叠的比较数量
    folded: usize,
}

impl BooleanLiteralVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 对表达式执行遍历，返回折叠的比较数量
    pub fn invoke(&mut self, expression: &mut Expression) -> usize {
        self.folded = 0;
        self.rewrite(expression);
        self.folded
    }

    /// 计算常量比较的真值
    ///
    /// 类型不可比较时，相等判定为假、不等判定为真，其余保持原样
    fn evaluate(left: &Value, op: ComparisonOperator, right: &Value) -> Option<bool> {
        match left.compare(right) {
            Some(ordering) => Some(op.evaluate(ordering)),
            None => match op {
                ComparisonOperator::Equal => Some(false),
                ComparisonOperator::NotEqual => Some(true),
                _ => None,
            },
        }
    }
}

impl ExpressionRewriter for BooleanLiteralVisitor {
    fn rewrite_node(&mut self, expression: &mut Expression) {
        let truth = match expression {
            Expression::Comparison { left, op, right } => match (left.as_ref(), right.as_ref()) {
                (Expression::Literal(l), Expression::Literal(r)) => Self::evaluate(l, *op, r),
                _ => None,
            },
            _ => None,
        };
        if let Some(truth) = truth {
            *expression = Expression::boolean(truth);
            self.folded += 1;
        }
    }
}
