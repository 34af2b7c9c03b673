//! 集成测试共享工具模块
//!
//! 提供编译器夹具和常用遍历步骤，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;

use graphview::config::CompilerConfig;
use graphview::core::ComparisonOperator;
use graphview::query::{QueryCompiler, TraversalStep};

/// 测试使用的 JsonServer 集合名
pub const COLLECTION: &str = "marvel";

/// 默认配置的编译器，附带 JsonServer 集合名
pub fn compiler() -> QueryCompiler {
    QueryCompiler::new(CompilerConfig {
        collection_name: Some(COLLECTION.to_string()),
        ..CompilerConfig::default()
    })
}

/// `g.V().out('knows')`
pub fn knows_steps() -> Vec<TraversalStep> {
    vec![
        TraversalStep::v(Vec::<String>::new()),
        TraversalStep::out(["knows"]),
    ]
}

/// `g.V().hasLabel('person').has('age', gt(29)).outE('created')`
pub fn created_edge_steps() -> Vec<TraversalStep> {
    vec![
        TraversalStep::v(Vec::<String>::new()),
        TraversalStep::has_label(["person"]),
        TraversalStep::has("age", ComparisonOperator::GreaterThan, 29),
        TraversalStep::out_e(["created"]),
    ]
}
