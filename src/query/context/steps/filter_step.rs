//! 过滤步骤 `has/hasLabel/hasId`
//!
//! 只向当前变量追加谓词，不移动当前变量

use serde::{Deserialize, Serialize};

use crate::core::error::ContextResult;
use crate::core::types::expression::Expression;
use crate::core::types::operators::{BooleanOperator, ComparisonOperator};
use crate::core::value::Value;
use crate::query::context::steps::source_step::id_predicate;
use crate::query::context::steps::StepHandler;
use crate::query::context::TraversalContext;

/// 属性存在性检查使用的函数名
pub const IS_DEFINED: &str = "IS_DEFINED";

/// `has` 步骤的谓词形式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HasPredicate {
    /// `key op value`
    Compare(ComparisonOperator, Value),
    /// `key` 取值属于给定集合
    Within(Vec<Value>),
    /// `key` 存在
    Exists,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HasStep {
    pub key: String,
    pub predicate: HasPredicate,
}

impl HasStep {
    pub fn new(key: impl Into<String>, predicate: HasPredicate) -> Self {
        Self {
            key: key.into(),
            predicate,
        }
    }

    fn condition(&self, alias: &str) -> Expression {
        let column = || Expression::column(alias, self.key.as_str());
        match &self.predicate {
            HasPredicate::Compare(op, value) => {
                Expression::compare(column(), *op, Expression::literal(value.clone()))
            }
            // 空集合不匹配任何值
            HasPredicate::Within(values) => Expression::disjunction(
                values
                    .iter()
                    .map(|value| Expression::eq(column(), Expression::literal(value.clone()))),
            )
            .unwrap_or_else(|| Expression::boolean(false)),
            HasPredicate::Exists => Expression::function(IS_DEFINED, vec![column()]),
        }
    }
}

impl StepHandler for HasStep {
    fn name(&self) -> &'static str {
        "has"
    }

    fn apply(&self, mut context: TraversalContext) -> ContextResult<TraversalContext> {
        let alias = context.require_current(self.name())?.alias().to_string();
        let condition = self.condition(&alias);
        context.where_conjunction(&alias, condition, BooleanOperator::And)?;
        Ok(context)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HasLabelStep {
    pub labels: Vec<String>,
}

impl HasLabelStep {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }
}

impl StepHandler for HasLabelStep {
    fn name(&self) -> &'static str {
        "hasLabel"
    }

    fn apply(&self, mut context: TraversalContext) -> ContextResult<TraversalContext> {
        let alias = context.require_current(self.name())?.alias().to_string();
        context.add_labels_predicate(&alias, &self.labels)?;
        Ok(context)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HasIdStep {
    pub ids: Vec<String>,
}

impl HasIdStep {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }
}

impl StepHandler for HasIdStep {
    fn name(&self) -> &'static str {
        "hasId"
    }

    fn apply(&self, mut context: TraversalContext) -> ContextResult<TraversalContext> {
        let alias = context.require_current(self.name())?.alias().to_string();
        if let Some(predicate) = id_predicate(&alias, &self.ids) {
            context.where_conjunction(&alias, predicate, BooleanOperator::And)?;
        }
        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ContextError;
    use crate::query::context::steps::VertexStep;

    fn start() -> TraversalContext {
        VertexStep::new(vec![]).apply(TraversalContext::new()).unwrap()
    }

    #[test]
    fn test_has_compare() {
        let step = HasStep::new(
            "age",
            HasPredicate::Compare(ComparisonOperator::GreaterThan, Value::Int(29)),
        );
        let context = step.apply(start()).unwrap();
        assert_eq!(
            context.predicate(),
            Some(&Expression::compare(
                Expression::column("N_0", "age"),
                ComparisonOperator::GreaterThan,
                Expression::literal(29),
            ))
        );
    }

    #[test]
    fn test_has_within_empty_is_false() {
        let context = HasStep::new("name", HasPredicate::Within(vec![]))
            .apply(start())
            .unwrap();
        assert_eq!(context.predicate(), Some(&Expression::boolean(false)));
    }

    #[test]
    fn test_has_exists() {
        let context = HasStep::new("email", HasPredicate::Exists).apply(start()).unwrap();
        assert_eq!(
            context.predicate(),
            Some(&Expression::function(
                "IS_DEFINED",
                vec![Expression::column("N_0", "email")],
            ))
        );
    }

    #[test]
    fn test_filters_conjoin_with_parentheses() {
        let context = HasLabelStep::new(vec!["person".to_string()])
            .apply(start())
            .unwrap();
        let context = HasIdStep::new(vec!["1".to_string()]).apply(context).unwrap();

        let predicate = context.predicate().unwrap();
        assert!(matches!(
            predicate,
            Expression::BooleanBinary { op: BooleanOperator::And, .. }
        ));
        assert!(predicate.conjunctions_parenthesized());
        assert_eq!(context.variable("N_0").unwrap().labels(), ["person".to_string()]);
    }

    #[test]
    fn test_empty_has_label_is_noop() {
        let context = HasLabelStep::new(vec![]).apply(start()).unwrap();
        assert!(context.predicate().is_none());
    }

    #[test]
    fn test_filter_without_current() {
        let err = HasIdStep::new(vec!["1".to_string()])
            .apply(TraversalContext::new())
            .unwrap_err();
        assert_eq!(err, ContextError::NoCurrentVariable { step: "hasId" });
    }
}
