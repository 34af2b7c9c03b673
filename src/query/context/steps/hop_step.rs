//! 跳转步骤
//!
//! - `out/in/both`：经由边跳到相邻顶点，当前变量变为远端顶点
//! - `outE/inE/bothE`：跳到边，当前变量变为边，远端顶点同样被声明
//! - `outV/inV/otherV`：从边回到端点，只移动当前变量

use serde::{Deserialize, Serialize};

use crate::core::error::{ContextError, ContextResult};
use crate::core::types::graph::EdgeDirection;
use crate::core::types::variable::VariableKind;
use crate::query::context::steps::StepHandler;
use crate::query::context::TraversalContext;

/// 从当前顶点声明边和远端顶点，并记录连接路径
///
/// 返回 `(edge, sink)`
fn declare_hop(
    context: &mut TraversalContext,
    step: &'static str,
    direction: EdgeDirection,
    labels: &[String],
) -> ContextResult<(String, String)> {
    let source = context.require_vertex(step)?;
    let edge = context.declare_variable(VariableKind::Edge(direction));
    context.add_labels_predicate(&edge, labels)?;
    let sink = context.declare_variable(VariableKind::Vertex);
    log::debug!("{}: {} -[{}]- {}", step, source, edge, sink);
    context.add_path(source, edge.clone(), sink.clone());
    Ok((edge, sink))
}

/// 顶点跳转 `out/in/both`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexHopStep {
    pub direction: EdgeDirection,
    pub labels: Vec<String>,
}

impl VertexHopStep {
    pub fn new(direction: EdgeDirection, labels: Vec<String>) -> Self {
        Self { direction, labels }
    }
}

impl StepHandler for VertexHopStep {
    fn name(&self) -> &'static str {
        match self.direction {
            EdgeDirection::Out => "out",
            EdgeDirection::In => "in",
            EdgeDirection::Both => "both",
        }
    }

    fn apply(&self, mut context: TraversalContext) -> ContextResult<TraversalContext> {
        let (_, sink) = declare_hop(&mut context, self.name(), self.direction, &self.labels)?;
        context.set_current_variable(&sink)?;
        Ok(context)
    }
}

/// 边跳转 `outE/inE/bothE`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeHopStep {
    pub direction: EdgeDirection,
    pub labels: Vec<String>,
}

impl EdgeHopStep {
    pub fn new(direction: EdgeDirection, labels: Vec<String>) -> Self {
        Self { direction, labels }
    }
}

impl StepHandler for EdgeHopStep {
    fn name(&self) -> &'static str {
        match self.direction {
            EdgeDirection::Out => "outE",
            EdgeDirection::In => "inE",
            EdgeDirection::Both => "bothE",
        }
    }

    fn apply(&self, mut context: TraversalContext) -> ContextResult<TraversalContext> {
        let (edge, _) = declare_hop(&mut context, self.name(), self.direction, &self.labels)?;
        context.set_current_variable(&edge)?;
        Ok(context)
    }
}

/// 边的端点选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeEnd {
    /// 边的起点
    OutV,
    /// 边的终点
    InV,
    /// 遍历来源以外的另一端
    OtherV,
}

/// 端点步骤 `outV/inV/otherV`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeVertexStep {
    pub end: EdgeEnd,
}

impl EdgeVertexStep {
    pub fn new(end: EdgeEnd) -> Self {
        Self { end }
    }
}

impl StepHandler for EdgeVertexStep {
    fn name(&self) -> &'static str {
        match self.end {
            EdgeEnd::OutV => "outV",
            EdgeEnd::InV => "inV",
            EdgeEnd::OtherV => "otherV",
        }
    }

    fn apply(&self, mut context: TraversalContext) -> ContextResult<TraversalContext> {
        let edge = context.require_edge(self.name())?;
        let path = context
            .path_of_edge(&edge)
            .cloned()
            .ok_or_else(|| ContextError::DetachedEdge { edge: edge.clone() })?;
        let direction = context
            .variable(&edge)
            .and_then(|variable| variable.direction())
            .ok_or_else(|| ContextError::UnknownVariable(edge.clone()))?;

        // 路径的 source 是遍历来源，sink 是远端
        let target = match (self.end, direction) {
            (EdgeEnd::OtherV, _) => path.sink,
            (EdgeEnd::OutV, EdgeDirection::Out) | (EdgeEnd::InV, EdgeDirection::In) => path.source,
            (EdgeEnd::InV, EdgeDirection::Out) | (EdgeEnd::OutV, EdgeDirection::In) => path.sink,
            (_, EdgeDirection::Both) => return Err(ContextError::UnsupportedHop { edge }),
        };
        context.set_current_variable(&target)?;
        Ok(context)
    }
}
