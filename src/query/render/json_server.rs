//! JsonServer 方言
//!
//! ```text
//! FOR <alias> IN ('<collection>')
//! FOR <var> IN <source>.*
//! WHERE <predicate>
//! SELECT <projection>
//! ```
//!
//! 重写顺序：布尔字面量 -> 多值属性展开（跳过边别名）

use crate::core::error::{RenderError, RenderResult};
use crate::query::document_query::DocumentQuery;
use crate::query::partition::FirstFetch;
use crate::query::render::{check_wildcard, render_primary, Dialect, QueryStringVisitor};
use crate::query::visitor::{ArrayUnfoldVisitor, BooleanLiteralVisitor};
use crate::utils::string_utils::single_quoted;

fn document(alias: &str) -> String {
    format!("Doc({})", alias)
}

fn select_clause(
    query: &DocumentQuery,
    alias: &str,
    visitor: &mut QueryStringVisitor,
) -> RenderResult<String> {
    let select = query.select_elements();
    if let [only] = select {
        if only.is_wildcard() {
            check_wildcard(only)?;
            return Ok(document(alias));
        }
    }

    let mut elements = Vec::with_capacity(select.len());
    for element in select {
        check_wildcard(element)?;
        if element.has_expressions() {
            let parts = element
                .expressions
                .iter()
                .flatten()
                .map(|expression| render_primary(visitor, expression, document))
                .collect::<RenderResult<Vec<_>>>()?;
            elements.push(format!(
                "StringConcatenate({}) AS {}",
                parts.join(", "),
                element.name
            ));
        } else if element.is_wildcard() {
            return Err(RenderError::WildcardNotAlone);
        } else {
            elements.push(format!("{} AS {}", document(&element.name), element.name));
        }
    }
    Ok(elements.join(", "))
}

pub(super) fn render(query: &DocumentQuery, first_fetch: Option<FirstFetch>) -> RenderResult<String> {
    if first_fetch.is_some() {
        return Err(RenderError::PartitionUnsupported {
            dialect: Dialect::JsonServer.name(),
        });
    }

    let mut visitor = QueryStringVisitor::new(Dialect::JsonServer);
    let alias = query.driving_alias().ok_or(RenderError::MissingAlias)?;
    let select = select_clause(query, alias, &mut visitor)?;
    let collection = query
        .collection_name
        .as_deref()
        .ok_or(RenderError::MissingCollectionName)?;

    let joins: String = query
        .joins()
        .iter()
        .map(|(join_alias, source)| format!("FOR {} IN {}.*\n", join_alias, source))
        .collect();

    let mut predicate = query
        .predicate()
        .cloned()
        .ok_or(RenderError::MissingPredicate)?;
    BooleanLiteralVisitor::new().invoke(&mut predicate);
    let mut unfold = ArrayUnfoldVisitor::new(&query.flat_properties);
    unfold.add_skip_table_name(query.edge_alias.as_deref());
    unfold.invoke(&mut predicate);

    Ok(format!(
        "FOR {} IN ({})\n{}WHERE {}\nSELECT {}",
        alias,
        single_quoted(collection),
        joins,
        visitor.invoke(&predicate),
        select
    ))
}
