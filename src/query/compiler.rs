//! 查询编译器
//!
//! 串起整条流水线：遍历步骤 -> 逻辑上下文 -> 文档查询 -> 方言文本。
//! 编译本身是纯计算，没有阻塞操作，也不共享可变状态。

use rayon::prelude::*;

use crate::config::{CompilerConfig, Config};
use crate::core::error::CompileResult;
use crate::query::context::{TraversalContext, TraversalStep};
use crate::query::document_query::{lower, lower_variable, DocumentQuery};
use crate::query::partition::{FirstFetch, PartitionPlan, PartitionSession};
use crate::query::render::{render, Dialect, RenderOptions};

#[derive(Debug, Clone, Default)]
pub struct QueryCompiler {
    config: CompilerConfig,
}

impl QueryCompiler {
    pub fn new(config: CompilerConfig) -> Self {
        Self { config }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.compiler.clone())
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// 依次应用遍历步骤，得到逻辑上下文
    pub fn build_context(&self, steps: &[TraversalStep]) -> CompileResult<TraversalContext> {
        Ok(TraversalContext::new().apply_steps(steps)?)
    }

    /// 编译到与方言无关的文档查询
    pub fn compile(&self, steps: &[TraversalStep]) -> CompileResult<DocumentQuery> {
        let context = self.build_context(steps)?;
        Ok(lower(&context, &self.config)?)
    }

    /// 只读取遍历中的某个变量，用于先行读取带过滤条件的前序顶点
    pub fn compile_variable(
        &self,
        steps: &[TraversalStep],
        alias: &str,
    ) -> CompileResult<DocumentQuery> {
        let context = self.build_context(steps)?;
        Ok(lower_variable(&context, alias, &self.config)?)
    }

    pub fn render(
        &self,
        query: &DocumentQuery,
        dialect: Dialect,
        options: RenderOptions,
    ) -> CompileResult<String> {
        Ok(render(query, dialect, options)?)
    }

    /// 编译并渲染；会话的首次读取还没完成时，本次渲染带上分区条件
    ///
    /// 只有渲染成功才消费首次读取，失败后重试仍会带上分区条件
    pub fn compile_to_string(
        &self,
        steps: &[TraversalStep],
        dialect: Dialect,
        session: &mut PartitionSession,
    ) -> CompileResult<String> {
        let query = self.compile(steps)?;
        let first_fetch = session.first_fetch_plan().cloned().map(FirstFetch::new);
        let partitioned = first_fetch.is_some();
        let text = self.render(&query, dialect, RenderOptions::with_first_fetch(first_fetch))?;
        if partitioned {
            session.commit_first_fetch();
        }
        Ok(text)
    }

    /// 为每个分区计划并行渲染一份 DocumentDB 查询，结果与计划一一对应
    pub fn render_partitions(
        &self,
        query: &DocumentQuery,
        plans: &[PartitionPlan],
    ) -> CompileResult<Vec<String>> {
        log::info!("并行渲染 {} 个分区查询", plans.len());
        plans
            .par_iter()
            .map(|plan| {
                let options = RenderOptions::with_first_fetch(Some(FirstFetch::new(plan.clone())));
                self.render(query, Dialect::DocumentDb, options)
            })
            .collect()
    }
}
