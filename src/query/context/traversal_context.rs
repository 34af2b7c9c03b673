//! 遍历逻辑上下文
//!
//! 按步骤累积变量、连接路径和 WHERE 谓词。每个步骤消费旧上下文并返回新上下文。

use serde::{Deserialize, Serialize};

use crate::core::error::{ContextError, ContextResult};
use crate::core::types::expression::Expression;
use crate::core::types::operators::BooleanOperator;
use crate::core::types::variable::{JoinPath, Variable, VariableKind};
use crate::query::context::steps::{StepHandler, TraversalStep};

/// 遍历逻辑上下文
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraversalContext {
    /// 已声明的变量，按声明顺序
    variables: Vec<Variable>,
    /// 连接路径，只追加
    paths: Vec<JoinPath>,
    /// 全部步骤累积的谓词
    predicate: Option<Expression>,
    /// 当前变量别名，作为下一步骤的隐式主语
    current: Option<String>,
    vertex_count: usize,
    edge_count: usize,
}

impl TraversalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 应用一个遍历步骤
    pub fn apply_step(self, step: &TraversalStep) -> ContextResult<Self> {
        log::debug!("应用遍历步骤: {}", step.name());
        step.apply(self)
    }

    /// 依次应用一组遍历步骤
    pub fn apply_steps<'a>(
        self,
        steps: impl IntoIterator<Item = &'a TraversalStep>,
    ) -> ContextResult<Self> {
        steps
            .into_iter()
            .try_fold(self, |context, step| context.apply_step(step))
    }

    /// 声明新变量并返回其别名
    ///
    /// 顶点命名为 `N_<n>`，边命名为 `E_<n>`，两类计数互相独立
    pub fn declare_variable(&mut self, kind: VariableKind) -> String {
        let counter = match kind {
            VariableKind::Vertex => &mut self.vertex_count,
            VariableKind::Edge(_) => &mut self.edge_count,
        };
        let alias = format!("{}_{}", kind.alias_prefix(), counter);
        *counter += 1;
        log::debug!("声明变量 {} ({})", alias, kind);
        self.variables.push(Variable::new(alias.clone(), kind));
        alias
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, alias: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.alias() == alias)
    }

    fn variable_mut(&mut self, alias: &str) -> ContextResult<&mut Variable> {
        self.variables
            .iter_mut()
            .find(|v| v.alias() == alias)
            .ok_or_else(|| ContextError::UnknownVariable(alias.to_string()))
    }

    pub fn paths(&self) -> &[JoinPath] {
        &self.paths
    }

    /// 记录连接路径
    pub fn add_path(
        &mut self,
        source: impl Into<String>,
        edge: impl Into<String>,
        sink: impl Into<String>,
    ) {
        self.paths.push(JoinPath::new(source, edge, sink));
    }

    /// 以某顶点为汇点的最近一条路径
    pub fn incoming_path(&self, vertex: &str) -> Option<&JoinPath> {
        self.paths.iter().rev().find(|path| path.sink == vertex)
    }

    /// 经过某条边的路径
    pub fn path_of_edge(&self, edge: &str) -> Option<&JoinPath> {
        self.paths.iter().find(|path| path.edge == edge)
    }

    /// 全部步骤累积的谓词
    pub fn predicate(&self) -> Option<&Expression> {
        self.predicate.as_ref()
    }

    pub fn current_variable(&self) -> Option<&Variable> {
        self.current.as_deref().and_then(|alias| self.variable(alias))
    }

    pub fn set_current_variable(&mut self, alias: &str) -> ContextResult<()> {
        if self.variable(alias).is_none() {
            return Err(ContextError::UnknownVariable(alias.to_string()));
        }
        self.current = Some(alias.to_string());
        Ok(())
    }

    /// 取得当前变量，不限种类
    pub fn require_current(&self, step: &'static str) -> ContextResult<&Variable> {
        self.current_variable()
            .ok_or(ContextError::NoCurrentVariable { step })
    }

    /// 取得当前顶点变量的别名
    pub fn require_vertex(&self, step: &'static str) -> ContextResult<String> {
        let current = self.require_current(step)?;
        if !current.kind().is_vertex() {
            return Err(ContextError::WrongVariableKind {
                step,
                expected: "顶点",
                alias: current.alias().to_string(),
                found: current.kind(),
            });
        }
        Ok(current.alias().to_string())
    }

    /// 取得当前边变量的别名
    pub fn require_edge(&self, step: &'static str) -> ContextResult<String> {
        let current = self.require_current(step)?;
        if !current.kind().is_edge() {
            return Err(ContextError::WrongVariableKind {
                step,
                expected: "边",
                alias: current.alias().to_string(),
                found: current.kind(),
            });
        }
        Ok(current.alias().to_string())
    }

    /// 给变量追加标签，并把标签谓词合并进 WHERE
    pub fn add_labels_predicate(&mut self, alias: &str, labels: &[String]) -> ContextResult<()> {
        let predicate = self.variable_mut(alias)?.add_labels(labels);
        if let Some(predicate) = predicate {
            self.where_conjunction(alias, predicate, BooleanOperator::And)?;
        }
        Ok(())
    }

    /// 合并条件到变量谓词和全局谓词
    pub fn where_conjunction(
        &mut self,
        alias: &str,
        condition: Expression,
        conjunction: BooleanOperator,
    ) -> ContextResult<()> {
        self.variable_mut(alias)?
            .where_conjunction(condition.clone(), conjunction);
        self.predicate = Some(Expression::conjoin(
            self.predicate.take(),
            condition,
            conjunction,
        ));
        Ok(())
    }
}
