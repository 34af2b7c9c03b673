//! 逻辑上下文降级为文档查询
//!
//! 当前变量决定这次读取的驱动文档：
//! - 经跳转到达的顶点：读取顶点自身，跳转边从入边字段（`out`）或出边字段（`in`）连接
//! - 边：读取源顶点，边从出边字段（`outE`）或入边字段（`inE`）连接
//! - 没有跳转的顶点：只读取顶点自身
//!
//! 谓词取驱动顶点与所连接边各自累积的谓词，数据从上下文复制而来。
//! 其他变量若带有过滤条件，这次读取无法表达，直接报错；
//! 执行层可以先用 [`lower_variable`] 单独读取这些变量。

use crate::config::CompilerConfig;
use crate::core::error::{ContextError, ContextResult};
use crate::core::types::expression::Expression;
use crate::core::types::graph::EdgeDirection;
use crate::core::types::operators::BooleanOperator;
use crate::core::types::variable::{Variable, VariableKind, ID_COLUMN, LABEL_COLUMN};
use crate::query::context::TraversalContext;
use crate::query::document_query::DocumentQuery;

/// 边数组在顶点文档中的字段
fn edge_source(config: &CompilerConfig, vertex: &str, field_is_reverse: bool) -> String {
    let field = if field_is_reverse {
        &config.reverse_edge_field
    } else {
        &config.edge_field
    };
    format!("{}.{}", vertex, field)
}

fn variable<'a>(context: &'a TraversalContext, alias: &str) -> ContextResult<&'a Variable> {
    context
        .variable(alias)
        .ok_or_else(|| ContextError::UnknownVariable(alias.to_string()))
}

/// 由逻辑上下文构造文档查询，读取当前变量
///
/// 整条遍历中任何不在这次读取里的变量都不能带过滤条件
pub fn lower(context: &TraversalContext, config: &CompilerConfig) -> ContextResult<DocumentQuery> {
    let current = context
        .current_variable()
        .ok_or(ContextError::NoCurrentVariable { step: "lower" })?;
    lower_fetch(context, current, context.variables(), config)
}

/// 读取上下文中指定的变量，只检查它及之前声明的变量
pub fn lower_variable(
    context: &TraversalContext,
    alias: &str,
    config: &CompilerConfig,
) -> ContextResult<DocumentQuery> {
    let target = variable(context, alias)?;
    let end = context
        .variables()
        .iter()
        .position(|v| v.alias() == alias)
        .map_or(0, |index| index + 1);
    lower_fetch(context, target, &context.variables()[..end], config)
}

/// `scope` 中不在这次读取里的变量不能带过滤条件
fn check_dropped_predicates(
    scope: &[Variable],
    target: &Variable,
    rendered: &[&str],
) -> ContextResult<()> {
    let dropped = scope
        .iter()
        .find(|v| v.predicate().is_some() && !rendered.contains(&v.alias()));
    match dropped {
        Some(v) => Err(ContextError::UnrenderedPredicate {
            alias: v.alias().to_string(),
            fetch: target.alias().to_string(),
        }),
        None => Ok(()),
    }
}

fn lower_fetch(
    context: &TraversalContext,
    current: &Variable,
    scope: &[Variable],
    config: &CompilerConfig,
) -> ContextResult<DocumentQuery> {
    let mut query = DocumentQuery::new();
    query.collection_name = config.collection_name.clone();
    query.flat_properties.insert(ID_COLUMN.to_string());
    query.flat_properties.insert(LABEL_COLUMN.to_string());
    query
        .flat_properties
        .extend(config.flat_properties.iter().cloned());

    let (vertex, edge) = match current.kind() {
        VariableKind::Vertex => match context.incoming_path(current.alias()) {
            Some(path) => {
                let edge = variable(context, &path.edge)?;
                let reverse = match edge.direction() {
                    // 出边到达的顶点在入边数组里保存这条边
                    Some(EdgeDirection::Out) => true,
                    Some(EdgeDirection::In) => false,
                    _ => {
                        return Err(ContextError::UnsupportedHop {
                            edge: path.edge.clone(),
                        })
                    }
                };
                query.add_join(edge.alias(), edge_source(config, current.alias(), reverse));
                (current, Some(edge))
            }
            None => (current, None),
        },
        VariableKind::Edge(direction) => {
            let path = context
                .path_of_edge(current.alias())
                .ok_or_else(|| ContextError::DetachedEdge {
                    edge: current.alias().to_string(),
                })?;
            let reverse = match direction {
                EdgeDirection::Out => false,
                EdgeDirection::In => true,
                EdgeDirection::Both => {
                    return Err(ContextError::UnsupportedHop {
                        edge: current.alias().to_string(),
                    })
                }
            };
            let source = variable(context, &path.source)?;
            query.add_join(current.alias(), edge_source(config, source.alias(), reverse));
            (source, Some(current))
        }
    };

    let rendered: Vec<&str> = std::iter::once(vertex).chain(edge).map(Variable::alias).collect();
    check_dropped_predicates(scope, current, &rendered)?;

    query.node_alias = Some(vertex.alias().to_string());
    query.edge_alias = edge.map(|edge| edge.alias().to_string());
    query.add_select_element(current.alias(), None);

    for predicate in std::iter::once(vertex)
        .chain(edge)
        .filter_map(Variable::predicate)
    {
        query.where_conjunction(predicate.clone(), BooleanOperator::And);
    }
    if query.predicate().is_none() {
        query.where_conjunction(Expression::boolean(true), BooleanOperator::And);
    }

    log::debug!(
        "降级完成: FROM {:?}, 连接 {} 个, 投影 {}",
        query.driving_alias(),
        query.joins().len(),
        current.alias()
    );
    Ok(query)
}
