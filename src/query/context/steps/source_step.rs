//! 起始步骤 `V(ids)`

use serde::{Deserialize, Serialize};

use crate::core::error::ContextResult;
use crate::core::types::expression::Expression;
use crate::core::types::operators::BooleanOperator;
use crate::core::types::variable::{VariableKind, ID_COLUMN};
use crate::query::context::steps::StepHandler;
use crate::query::context::TraversalContext;

/// 声明新的顶点变量并设为当前变量
///
/// 给出 ID 时追加 `alias.id` 的相等析取
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexStep {
    pub ids: Vec<String>,
}

impl VertexStep {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }
}

/// 对 `alias.id` 的相等析取，ID 为空时返回 `None`
pub(crate) fn id_predicate(alias: &str, ids: &[String]) -> Option<Expression> {
    Expression::disjunction(ids.iter().map(|id| {
        Expression::eq(
            Expression::column(alias, ID_COLUMN),
            Expression::literal(id.as_str()),
        )
    }))
}

impl StepHandler for VertexStep {
    fn name(&self) -> &'static str {
        "V"
    }

    fn apply(&self, mut context: TraversalContext) -> ContextResult<TraversalContext> {
        let alias = context.declare_variable(VariableKind::Vertex);
        if let Some(predicate) = id_predicate(&alias, &self.ids) {
            context.where_conjunction(&alias, predicate, BooleanOperator::And)?;
        }
        context.set_current_variable(&alias)?;
        Ok(context)
    }
}
