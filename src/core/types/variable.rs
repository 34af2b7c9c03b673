//! 变量相关基础类型

use crate::core::types::expression::Expression;
use crate::core::types::graph::EdgeDirection;
use crate::core::types::operators::BooleanOperator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 保留的标签列名
pub const LABEL_COLUMN: &str = "label";

/// 保留的文档 ID 列名
pub const ID_COLUMN: &str = "id";

/// 变量种类 - 强类型枚举替代String
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableKind {
    /// 顶点
    Vertex,
    /// 边，携带遍历方向
    Edge(EdgeDirection),
}

impl VariableKind {
    pub fn is_vertex(&self) -> bool {
        matches!(self, VariableKind::Vertex)
    }

    pub fn is_edge(&self) -> bool {
        matches!(self, VariableKind::Edge(_))
    }

    /// 别名前缀：顶点 `N`，边 `E`
    pub fn alias_prefix(&self) -> &'static str {
        match self {
            VariableKind::Vertex => "N",
            VariableKind::Edge(_) => "E",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariableKind::Vertex => write!(f, "vertex"),
            VariableKind::Edge(direction) => write!(f, "{} edge", direction),
        }
    }
}

/// 遍历变量
///
/// 由引入新跳转的遍历步骤创建。创建后只允许追加标签和谓词。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    alias: String,
    kind: VariableKind,
    labels: Vec<String>,
    predicate: Option<Expression>,
}

impl Variable {
    pub fn new(alias: impl Into<String>, kind: VariableKind) -> Self {
        Self {
            alias: alias.into(),
            kind,
            labels: Vec::new(),
            predicate: None,
        }
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn kind(&self) -> VariableKind {
        self.kind
    }

    /// 边的方向，顶点返回 `None`
    pub fn direction(&self) -> Option<EdgeDirection> {
        match self.kind {
            VariableKind::Vertex => None,
            VariableKind::Edge(direction) => Some(direction),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// 该变量自身累积的谓词
    pub fn predicate(&self) -> Option<&Expression> {
        self.predicate.as_ref()
    }

    /// 追加标签
    ///
    /// 返回本批标签对应的谓词：对保留 `label` 列的相等比较析取。
    /// 标签为空时不产生谓词。
    pub fn add_labels(&mut self, labels: &[String]) -> Option<Expression> {
        self.labels.extend(labels.iter().cloned());
        Expression::disjunction(labels.iter().map(|label| {
            Expression::eq(
                Expression::column(self.alias.as_str(), LABEL_COLUMN),
                Expression::literal(label.as_str()),
            )
        }))
    }

    /// 合并谓词
    pub fn where_conjunction(&mut self, condition: Expression, conjunction: BooleanOperator) {
        self.predicate = Some(Expression::conjoin(self.predicate.take(), condition, conjunction));
    }
}

/// 连接路径：源顶点 - 边 - 汇顶点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinPath {
    pub source: String,
    pub edge: String,
    pub sink: String,
}

impl JoinPath {
    pub fn new(source: impl Into<String>, edge: impl Into<String>, sink: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            edge: edge.into(),
            sink: sink.into(),
        }
    }
}
