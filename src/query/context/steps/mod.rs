//! 遍历步骤 - 静态分发实现
//!
//! 每个步骤实现 [`StepHandler`]，再由 [`TraversalStep`] 枚举统一分发。
//!
//! ```rust
//! use graphview::query::context::{TraversalContext, TraversalStep};
//!
//! let steps = vec![
//!     TraversalStep::v(Vec::<String>::new()),
//!     TraversalStep::has_label(["person"]),
//!     TraversalStep::out_e(["knows"]),
//! ];
//! let context = TraversalContext::new().apply_steps(&steps).unwrap();
//! assert_eq!(context.current_variable().unwrap().alias(), "E_0");
//! ```

use serde::{Deserialize, Serialize};

use crate::core::error::ContextResult;
use crate::core::types::graph::EdgeDirection;
use crate::core::types::operators::ComparisonOperator;
use crate::core::value::Value;
use crate::query::context::TraversalContext;

mod filter_step;
mod hop_step;
mod source_step;

pub use filter_step::{HasIdStep, HasLabelStep, HasPredicate, HasStep};
pub use hop_step::{EdgeEnd, EdgeHopStep, EdgeVertexStep, VertexHopStep};
pub use source_step::VertexStep;

/// 遍历步骤处理器
pub trait StepHandler {
    /// 步骤名称，用于日志和错误信息
    fn name(&self) -> &'static str;

    /// 消费上下文并返回应用本步骤后的新上下文
    fn apply(&self, context: TraversalContext) -> ContextResult<TraversalContext>;
}

macro_rules! define_traversal_steps {
    (
        $(#[$enum_meta:meta])*
        pub enum $enum_name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant_name:ident($step_type:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub enum $enum_name {
            $(
                $(#[$variant_meta])*
                $variant_name($step_type),
            )+
        }

        impl StepHandler for $enum_name {
            fn name(&self) -> &'static str {
                match self {
                    $(
                        $enum_name::$variant_name(step) => step.name(),
                    )+
                }
            }

            fn apply(&self, context: TraversalContext) -> ContextResult<TraversalContext> {
                match self {
                    $(
                        $enum_name::$variant_name(step) => step.apply(context),
                    )+
                }
            }
        }

        $(
            impl From<$step_type> for $enum_name {
                fn from(step: $step_type) -> Self {
                    $enum_name::$variant_name(step)
                }
            }
        )+
    };
}

define_traversal_steps! {
    /// 遍历步骤
    pub enum TraversalStep {
        // ==================== 起始步骤 ====================
        Vertex(VertexStep),

        // ==================== 跳转步骤 ====================
        VertexHop(VertexHopStep),
        EdgeHop(EdgeHopStep),
        EdgeVertex(EdgeVertexStep),

        // ==================== 过滤步骤 ====================
        Has(HasStep),
        HasLabel(HasLabelStep),
        HasId(HasIdStep),
    }
}

fn collect_strings<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

impl TraversalStep {
    /// `V(ids)`：声明起始顶点
    pub fn v<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        VertexStep::new(collect_strings(ids)).into()
    }

    /// `out(labels)`
    pub fn out<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        VertexHopStep::new(EdgeDirection::Out, collect_strings(labels)).into()
    }

    /// `in(labels)`
    pub fn in_<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        VertexHopStep::new(EdgeDirection::In, collect_strings(labels)).into()
    }

    /// `both(labels)`
    pub fn both<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        VertexHopStep::new(EdgeDirection::Both, collect_strings(labels)).into()
    }

    /// `outE(labels)`
    pub fn out_e<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EdgeHopStep::new(EdgeDirection::Out, collect_strings(labels)).into()
    }

    /// `inE(labels)`
    pub fn in_e<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EdgeHopStep::new(EdgeDirection::In, collect_strings(labels)).into()
    }

    /// `bothE(labels)`
    pub fn both_e<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EdgeHopStep::new(EdgeDirection::Both, collect_strings(labels)).into()
    }

    pub fn out_v() -> Self {
        EdgeVertexStep::new(EdgeEnd::OutV).into()
    }

    pub fn in_v() -> Self {
        EdgeVertexStep::new(EdgeEnd::InV).into()
    }

    pub fn other_v() -> Self {
        EdgeVertexStep::new(EdgeEnd::OtherV).into()
    }

    /// `has(key, op, value)`
    pub fn has(key: impl Into<String>, op: ComparisonOperator, value: impl Into<Value>) -> Self {
        HasStep::new(key, HasPredicate::Compare(op, value.into())).into()
    }

    /// `has(key, within(values))`
    pub fn has_within<I, V>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values = values.into_iter().map(Into::into).collect();
        HasStep::new(key, HasPredicate::Within(values)).into()
    }

    /// `has(key)`：只要求属性存在
    pub fn has_key(key: impl Into<String>) -> Self {
        HasStep::new(key, HasPredicate::Exists).into()
    }

    pub fn has_label<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        HasLabelStep::new(collect_strings(labels)).into()
    }

    pub fn has_id<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        HasIdStep::new(collect_strings(ids)).into()
    }
}
