//! 表达式检查方法

use crate::core::types::expression::def::Expression;
use crate::core::types::operators::BooleanOperator;

impl Expression {
    /// 是否为基础表达式（字面量或列引用）
    ///
    /// SELECT 拼接列表只接受基础表达式
    pub fn is_primary(&self) -> bool {
        matches!(self, Expression::Literal(_) | Expression::ColumnRef { .. })
    }

    /// 变体名称，用于错误信息和日志
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Literal(_) => "Literal",
            Expression::ColumnRef { .. } => "ColumnRef",
            Expression::Parenthesis(_) => "Parenthesis",
            Expression::Comparison { .. } => "Comparison",
            Expression::BooleanBinary { .. } => "BooleanBinary",
            Expression::Function { .. } => "Function",
        }
    }

    /// 直接子节点
    pub fn children(&self) -> Vec<&Expression> {
        match self {
            Expression::Literal(_) | Expression::ColumnRef { .. } => Vec::new(),
            Expression::Parenthesis(inner) => vec![inner.as_ref()],
            Expression::Comparison { left, right, .. }
            | Expression::BooleanBinary { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            Expression::Function { args, .. } => args.iter().collect(),
        }
    }

    /// 检查所有 AND 节点的两个子节点是否都是括号节点
    ///
    /// 谓词合并规则保证的结构性质
    pub fn conjunctions_parenthesized(&self) -> bool {
        if let Expression::BooleanBinary {
            left,
            op: BooleanOperator::And,
            right,
        } = self
        {
            if !matches!(left.as_ref(), Expression::Parenthesis(_))
                || !matches!(right.as_ref(), Expression::Parenthesis(_))
            {
                return false;
            }
        }
        self.children()
            .into_iter()
            .all(Expression::conjunctions_parenthesized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_primary() {
        assert!(Expression::literal("a").is_primary());
        assert!(Expression::column("N_0", "name").is_primary());
        assert!(!Expression::function("IS_DEFINED", vec![]).is_primary());
    }

    #[test]
    fn test_conjunctions_parenthesized_rejects_bare_and() {
        let bare = Expression::boolean_binary(
            Expression::boolean(true),
            BooleanOperator::And,
            Expression::boolean(false),
        );
        assert!(!bare.conjunctions_parenthesized());

        let wrapped = Expression::conjoin(Some(Expression::boolean(true)), Expression::boolean(false), BooleanOperator::And);
        assert!(wrapped.conjunctions_parenthesized());
    }
}
