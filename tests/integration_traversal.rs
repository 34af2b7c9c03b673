//! 遍历上下文集成测试
//!
//! 测试范围：
//! - 多步遍历的变量、路径和当前变量
//! - 过滤步骤的谓词合并
//! - 步骤种类约束
//! - 单次读取无法表达的过滤条件
//! - 合取始终带括号的结构性质

mod common;

use common::assertions::{assert_err_with, assert_ok};
use common::compiler;
use graphview::core::{ComparisonOperator, Expression, Value, VariableKind};
use graphview::query::context::TraversalContext;
use graphview::query::{Dialect, RenderOptions, TraversalStep};
use proptest::prelude::*;

fn build(steps: &[TraversalStep]) -> TraversalContext {
    assert_ok(compiler().build_context(steps))
}

#[test]
fn test_round_trip_traversal() {
    // g.V('1').outE('knows').inV().in('created').otherV 之前的路径
    let context = build(&[
        TraversalStep::v(["1"]),
        TraversalStep::out_e(["knows"]),
        TraversalStep::in_v(),
        TraversalStep::in_(["created"]),
    ]);

    let aliases: Vec<&str> = context.variables().iter().map(|v| v.alias()).collect();
    assert_eq!(aliases, ["N_0", "E_0", "N_1", "E_1", "N_2"]);
    assert_eq!(context.paths().len(), 2);
    assert_eq!(context.paths()[1].source, "N_1");
    assert_eq!(context.current_variable().map(|v| v.alias()), Some("N_2"));
    assert_eq!(
        context.variable("E_1").map(|v| v.kind()),
        Some(VariableKind::Edge(graphview::core::EdgeDirection::In))
    );
}

#[test]
fn test_other_v_returns_to_far_end() {
    let context = build(&[
        TraversalStep::v(Vec::<String>::new()),
        TraversalStep::both_e(["knows"]),
        TraversalStep::other_v(),
    ]);
    assert_eq!(context.current_variable().map(|v| v.alias()), Some("N_1"));
}

#[test]
fn test_filters_attach_to_current_variable() {
    let context = build(&[
        TraversalStep::v(Vec::<String>::new()),
        TraversalStep::out_e(["knows"]),
        TraversalStep::has("weight", ComparisonOperator::GreaterThanOrEqual, 0.5),
        TraversalStep::in_v(),
        TraversalStep::has_within("name", ["vadas", "josh"]),
    ]);

    let edge = context.variable("E_0").expect("edge variable");
    assert!(edge.predicate().is_some());

    let sink = context.variable("N_1").expect("sink variable");
    assert_eq!(
        sink.predicate(),
        Some(&Expression::boolean_binary(
            Expression::eq(Expression::column("N_1", "name"), Expression::literal("vadas")),
            graphview::core::BooleanOperator::Or,
            Expression::eq(Expression::column("N_1", "name"), Expression::literal("josh")),
        ))
    );
    assert!(context.variable("N_0").and_then(|v| v.predicate()).is_none());
}

#[test]
fn test_edge_step_on_vertex_fails() {
    assert_err_with(
        compiler().build_context(&[TraversalStep::v(["1"]), TraversalStep::out_v()]),
        "需要边变量",
    );
}

#[test]
fn test_step_without_start_fails() {
    assert_err_with(
        compiler().compile(&[TraversalStep::has_id(["1"])]),
        "还没有任何变量",
    );
}

#[test]
fn test_both_hop_cannot_be_fetched() {
    assert_err_with(
        compiler().compile(&[TraversalStep::v(["1"]), TraversalStep::both(["knows"])]),
        "双向跳转",
    );
}

#[test]
fn test_source_filters_need_their_own_fetch() {
    let steps = [
        TraversalStep::v(["1"]),
        TraversalStep::has("name", ComparisonOperator::Equal, "marko"),
        TraversalStep::out(["knows"]),
    ];
    assert_err_with(compiler().compile(&steps), "变量 N_0 上的过滤条件");

    let source = assert_ok(compiler().compile_variable(&steps, "N_0"));
    let text = assert_ok(compiler().render(&source, Dialect::DocumentDb, RenderOptions::default()));
    assert_eq!(
        text,
        "SELECT N_0\nFROM N_0 JOIN N_0_0 IN N_0['name']\n\
         WHERE ((N_0.id = \"1\") AND (N_0_0._value = \"marko\"))"
    );
}

#[test]
fn test_context_json_round_trip() {
    let context = build(&[TraversalStep::v(["1"]), TraversalStep::out(["knows"])]);
    let json = serde_json::to_string(&context).expect("serialize context");
    let back: TraversalContext = serde_json::from_str(&json).expect("deserialize context");
    assert_eq!(back, context);
}

#[test]
fn test_has_key_renders_is_defined() {
    let query = assert_ok(compiler().compile(&[
        TraversalStep::v(Vec::<String>::new()),
        TraversalStep::has_key("email"),
    ]));
    let text = assert_ok(compiler().render(&query, Dialect::DocumentDb, RenderOptions::default()));
    assert!(text.ends_with("WHERE (IS_DEFINED(N_0_0._value))"), "{}", text);
}

fn filter_step() -> impl Strategy<Value = TraversalStep> {
    prop_oneof![
        (0i64..100).prop_map(|age| TraversalStep::has("age", ComparisonOperator::LessThan, age)),
        proptest::collection::vec("[a-z]{1,6}", 0..3).prop_map(TraversalStep::has_label),
        proptest::collection::vec("[0-9]{1,3}", 0..3).prop_map(TraversalStep::has_id),
        proptest::collection::vec(any::<bool>(), 0..3)
            .prop_map(|values| TraversalStep::has_within("flag", values.into_iter().map(Value::Bool))),
    ]
}

proptest! {
    #[test]
    fn prop_conjunctions_always_parenthesized(filters in proptest::collection::vec(filter_step(), 1..8)) {
        let mut steps = vec![TraversalStep::v(Vec::<String>::new())];
        steps.extend(filters);
        let context = TraversalContext::new().apply_steps(&steps).unwrap();

        if let Some(predicate) = context.predicate() {
            prop_assert!(predicate.conjunctions_parenthesized());
        }

        let query = compiler().compile(&steps).unwrap();
        let text = compiler()
            .render(&query, Dialect::DocumentDb, RenderOptions::default())
            .unwrap();
        let opens = text.matches('(').count();
        let closes = text.matches(')').count();
        prop_assert_eq!(opens, closes);
    }
}
