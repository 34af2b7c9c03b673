//! DocumentDB 方言
//!
//! ```text
//! SELECT <projection>
//! FROM <alias> JOIN <var> IN <source> ...
//! WHERE (<predicate>)
//! ```
//!
//! 重写顺序：布尔字面量 -> 顶点属性规范化（跳过边别名）-> 边别名方括号化

use crate::core::error::{RenderError, RenderResult};
use crate::query::document_query::DocumentQuery;
use crate::query::partition::FirstFetch;
use crate::query::render::{check_wildcard, render_primary, Dialect, QueryStringVisitor};
use crate::query::visitor::{
    BooleanLiteralVisitor, BracketIdentifierVisitor, NormalizeNodePropertyVisitor,
};
use crate::utils::string_utils::single_quoted;

fn select_clause(query: &DocumentQuery, visitor: &mut QueryStringVisitor) -> RenderResult<String> {
    let mut elements = Vec::with_capacity(query.select_elements().len());
    for element in query.select_elements() {
        check_wildcard(element)?;
        let expressions = match &element.expressions {
            Some(expressions) if !expressions.is_empty() => expressions,
            _ => {
                elements.push(element.name.clone());
                continue;
            }
        };
        let parts = expressions
            .iter()
            .map(|expression| render_primary(visitor, expression, str::to_string))
            .collect::<RenderResult<Vec<_>>>()?;
        let value = if parts.len() == 1 {
            parts.concat()
        } else {
            format!("CONCAT({})", parts.join(", "))
        };
        elements.push(format!("{} AS {}", value, element.name));
    }
    Ok(format!("SELECT {}", elements.join(", ")))
}

pub(super) fn render(query: &DocumentQuery, first_fetch: Option<FirstFetch>) -> RenderResult<String> {
    let mut visitor = QueryStringVisitor::new(Dialect::DocumentDb);
    let select = select_clause(query, &mut visitor)?;
    let alias = query.driving_alias().ok_or(RenderError::MissingAlias)?;

    let mut predicate = query
        .predicate()
        .cloned()
        .ok_or(RenderError::MissingPredicate)?;

    BooleanLiteralVisitor::new().invoke(&mut predicate);

    let mut normalizer = NormalizeNodePropertyVisitor::new();
    normalizer.add_flat_properties(&query.flat_properties);
    normalizer.add_skip_table_name(query.edge_alias.as_deref());
    let property_joins = normalizer.invoke(&mut predicate);

    if let Some(edge_alias) = &query.edge_alias {
        let mut bracket = BracketIdentifierVisitor::new();
        bracket.add_table_name(edge_alias.as_str());
        bracket.invoke(&mut predicate);
    }

    let mut from = format!("FROM {}", alias);
    for join in &property_joins {
        from.push_str(&format!(
            " JOIN {} IN {}[{}]",
            join.variable,
            join.table,
            single_quoted(&join.property)
        ));
    }
    for (join_alias, source) in query.joins() {
        from.push_str(&format!(" JOIN {} IN {}", join_alias, source));
    }

    let raw_where = visitor.invoke(&predicate);
    let where_clause = match first_fetch {
        Some(token) => format!(
            "WHERE ({})",
            token.plan().append_to_where_clause(alias, &raw_where)?
        ),
        None => format!("WHERE ({})", raw_where),
    };

    Ok(format!("{}\n{}\n{}", select, from, where_clause))
}
