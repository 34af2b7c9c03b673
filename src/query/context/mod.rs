//! 逻辑上下文模块
//!
//! 把遍历步骤序列折叠为一个逻辑上下文：变量、连接路径、累积谓词和当前变量。
//!
//! # 模块结构
//!
//! - `traversal_context.rs` - [`TraversalContext`] 本体
//! - `steps/` - 各遍历步骤的处理器与 [`TraversalStep`] 分发枚举

pub mod steps;
mod traversal_context;

pub use steps::{
    EdgeEnd, EdgeHopStep, EdgeVertexStep, HasIdStep, HasLabelStep, HasPredicate, HasStep,
    StepHandler, TraversalStep, VertexHopStep, VertexStep,
};
pub use traversal_context::TraversalContext;
