//! 方言渲染集成测试
//!
//! 测试范围：
//! - 遍历步骤到 DocumentDB / JsonServer 文本的完整编译
//! - 两种方言选择相同的驱动别名
//! - 渲染不修改文档查询
//! - 嵌套属性产生的隐式连接

mod common;

use common::assertions::{assert_clause_count, assert_err_with, assert_ok, clause};
use common::{compiler, created_edge_steps, knows_steps};
use graphview::core::{BooleanOperator, ComparisonOperator, Expression};
use graphview::query::{Dialect, DocumentQuery, RenderOptions, TraversalStep};

fn compile_wildcard(steps: &[TraversalStep]) -> DocumentQuery {
    let mut query = assert_ok(compiler().compile(steps));
    query.clear_select();
    query.add_select_element("*", None);
    query
}

fn render(query: &DocumentQuery, dialect: Dialect) -> String {
    assert_ok(compiler().render(query, dialect, RenderOptions::default()))
}

// ==================== 端到端场景 ====================

#[test]
fn test_out_knows_document_db() {
    let query = compile_wildcard(&knows_steps());
    let text = render(&query, Dialect::DocumentDb);

    assert_eq!(
        text,
        "SELECT *\nFROM N_1 JOIN E_0 IN N_1._reverse_edge\nWHERE (E_0[\"label\"] = \"knows\")"
    );
    // 没有嵌套属性谓词时不会生成属性连接
    assert!(!text.contains("N_1_0"));
}

#[test]
fn test_out_knows_json_server() {
    let query = compile_wildcard(&knows_steps());
    assert_eq!(
        render(&query, Dialect::JsonServer),
        "FOR N_1 IN ('marvel')\nFOR E_0 IN N_1._reverse_edge.*\nWHERE E_0.label = 'knows'\nSELECT Doc(N_1)"
    );
}

#[test]
fn test_dialects_share_driving_alias() {
    for steps in [knows_steps(), created_edge_steps()] {
        let query = assert_ok(compiler().compile(&steps));
        let alias = query.driving_alias().expect("driving alias").to_string();

        let docdb = render(&query, Dialect::DocumentDb);
        let json = render(&query, Dialect::JsonServer);

        assert_eq!(clause(&docdb, "FROM ").split(' ').nth(1), Some(alias.as_str()));
        assert_eq!(clause(&json, "FOR ").split(' ').nth(1), Some(alias.as_str()));
    }
}

#[test]
fn test_edge_fetch_with_nested_property() {
    let query = assert_ok(compiler().compile(&created_edge_steps()));

    assert_eq!(
        render(&query, Dialect::DocumentDb),
        "SELECT E_0\n\
         FROM N_0 JOIN N_0_0 IN N_0['age'] JOIN E_0 IN N_0._edge\n\
         WHERE (((N_0.label = \"person\") AND (N_0_0._value > 29)) AND (E_0[\"label\"] = \"created\"))"
    );
    assert_eq!(
        render(&query, Dialect::JsonServer),
        "FOR N_0 IN ('marvel')\n\
         FOR E_0 IN N_0._edge.*\n\
         WHERE ((N_0.label = 'person') AND (N_0.age.*._value > 29)) AND (E_0.label = 'created')\n\
         SELECT Doc(E_0) AS E_0"
    );
}

#[test]
fn test_property_name_with_space() {
    let query = assert_ok(compiler().compile(&[
        TraversalStep::v(Vec::<String>::new()),
        TraversalStep::has("first name", ComparisonOperator::Equal, "marko"),
    ]));
    assert_eq!(
        render(&query, Dialect::JsonServer),
        "FOR N_0 IN ('marvel')\nWHERE N_0.[\"first name\"].*._value = 'marko'\nSELECT Doc(N_0) AS N_0"
    );
    assert_eq!(
        render(&query, Dialect::DocumentDb),
        "SELECT N_0\nFROM N_0 JOIN N_0_0 IN N_0['first name']\nWHERE (N_0_0._value = \"marko\")"
    );
}

// ==================== 渲染性质 ====================

#[test]
fn test_render_leaves_query_untouched() {
    let query = assert_ok(compiler().compile(&created_edge_steps()));
    let snapshot = query.clone();

    let first = render(&query, Dialect::DocumentDb);
    render(&query, Dialect::JsonServer);
    let again = render(&query, Dialect::DocumentDb);

    assert_eq!(query, snapshot);
    assert_eq!(first, again);
}

#[test]
fn test_single_select_and_where() {
    for steps in [knows_steps(), created_edge_steps()] {
        let query = assert_ok(compiler().compile(&steps));

        let docdb = render(&query, Dialect::DocumentDb);
        assert_clause_count(&docdb, "SELECT ", 1);
        assert_clause_count(&docdb, "WHERE ", 1);

        let json = render(&query, Dialect::JsonServer);
        assert_clause_count(&json, "SELECT ", 1);
        assert_clause_count(&json, "WHERE ", 1);
    }
}

#[test]
fn test_extra_conjunction_before_render() {
    let mut query = assert_ok(compiler().compile(&knows_steps()));
    query.where_conjunction(
        Expression::eq(Expression::column("N_1", "id"), Expression::literal("42")),
        BooleanOperator::Or,
    );
    let text = render(&query, Dialect::DocumentDb);
    assert_eq!(
        clause(&text, "WHERE "),
        "WHERE ((E_0[\"label\"] = \"knows\") OR (N_1.id = \"42\"))"
    );
}

// ==================== 错误 ====================

#[test]
fn test_empty_projection_fails() {
    let mut query = assert_ok(compiler().compile(&knows_steps()));
    query.clear_select();
    assert_err_with(
        compiler().render(&query, Dialect::DocumentDb, RenderOptions::default()),
        "SELECT 子句为空",
    );
}

#[test]
fn test_wildcard_with_empty_list_fails() {
    let mut query = assert_ok(compiler().compile(&knows_steps()));
    query.clear_select();
    query.add_select_element("*", Some(Vec::new()));
    for dialect in [Dialect::DocumentDb, Dialect::JsonServer] {
        assert_err_with(
            compiler().render(&query, dialect, RenderOptions::default()),
            "不能与 AS",
        );
    }
}

#[test]
fn test_json_server_requires_collection() {
    let bare = graphview::query::QueryCompiler::default();
    let query = assert_ok(bare.compile(&knows_steps()));
    assert_err_with(
        bare.render(&query, Dialect::JsonServer, RenderOptions::default()),
        "集合名称",
    );
}
