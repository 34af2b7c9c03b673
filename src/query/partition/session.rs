//! 首次读取令牌
//!
//! 分区条件只加在一次运行的第一次读取上。会话持有本工作进程的计划，
//! 第一次请求时交出令牌，之后返回 `None`，直到显式 `reset`。
//! 需要先渲染再确认的调用方用 `first_fetch_plan` 查看、渲染成功后
//! `commit_first_fetch`，渲染失败时令牌仍然有效。

use crate::config::PartitionConfig;
use crate::core::error::PartitionResult;
use crate::query::partition::{select_for_worker, worker_index_from_env, PartitionPlan};

/// 一次性的首次读取令牌，渲染时消费
#[derive(Debug, PartialEq)]
pub struct FirstFetch {
    plan: PartitionPlan,
}

impl FirstFetch {
    pub(crate) fn new(plan: PartitionPlan) -> Self {
        Self { plan }
    }

    pub fn plan(&self) -> &PartitionPlan {
        &self.plan
    }
}

/// 单个工作进程的分区会话
#[derive(Debug, Clone, Default)]
pub struct PartitionSession {
    plan: Option<PartitionPlan>,
    consumed: bool,
}

impl PartitionSession {
    pub fn new(plan: Option<PartitionPlan>) -> Self {
        Self {
            plan,
            consumed: false,
        }
    }

    /// 按分区配置为当前工作进程建立会话
    ///
    /// 并行度为 1 时不分区；否则切分首字母区间，按环境变量中的序号取一段
    pub fn for_worker(config: &PartitionConfig) -> PartitionResult<Self> {
        if config.parallelism <= 1 {
            return Ok(Self::default());
        }
        let plans = PartitionPlan::split_first_char(&config.key, config.parallelism)?;
        let index = worker_index_from_env(&config.worker_index_env);
        let plan = select_for_worker(&plans, index).cloned();
        if plan.is_none() {
            log::warn!("工作进程序号 {} 超出分区数 {}，不加分区条件", index, plans.len());
        }
        Ok(Self::new(plan))
    }

    pub fn plan(&self) -> Option<&PartitionPlan> {
        self.plan.as_ref()
    }

    /// 首次读取尚未发生时返回要加的分区计划，不消费令牌
    pub fn first_fetch_plan(&self) -> Option<&PartitionPlan> {
        if self.consumed {
            return None;
        }
        self.plan.as_ref()
    }

    /// 标记首次读取已完成；没有计划时无事可做
    pub fn commit_first_fetch(&mut self) {
        if let Some(plan) = self.first_fetch_plan() {
            log::debug!("首次读取完成: 分区键 {}", plan.key);
            self.consumed = true;
        }
    }

    /// 取出首次读取令牌；没有计划或已取出时返回 `None`
    pub fn take_first_fetch(&mut self) -> Option<FirstFetch> {
        let plan = self.first_fetch_plan()?.clone();
        self.commit_first_fetch();
        Some(FirstFetch::new(plan))
    }

    /// 开始新的一次运行
    pub fn reset(&mut self) {
        self.consumed = false;
    }
}
