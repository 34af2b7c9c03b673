//! 方言渲染
//!
//! 把 [`DocumentQuery`] 渲染为目标方言的查询文本。每次渲染都在谓词副本上
//! 按方言固定的顺序执行重写遍历，调用方持有的查询不会被修改。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::error::{RenderError, RenderResult};
use crate::core::types::expression::Expression;
use crate::query::document_query::{DocumentQuery, SelectElement};
use crate::query::partition::FirstFetch;

mod docdb;
mod json_server;
mod string_visitor;

pub use string_visitor::QueryStringVisitor;

/// 目标查询方言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    /// `SELECT ... FROM ... JOIN ... WHERE (...)`
    DocumentDb,
    /// `FOR ... IN ('collection') ... WHERE ... SELECT ...`
    JsonServer,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::DocumentDb => "DocumentDB",
            Dialect::JsonServer => "JsonServer",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 单次渲染的参数
#[derive(Debug, Default)]
pub struct RenderOptions {
    /// 本次渲染是否为分区运行的首次读取
    pub first_fetch: Option<FirstFetch>,
}

impl RenderOptions {
    pub fn with_first_fetch(first_fetch: Option<FirstFetch>) -> Self {
        Self { first_fetch }
    }
}

/// 渲染文档查询
pub fn render(
    query: &DocumentQuery,
    dialect: Dialect,
    options: RenderOptions,
) -> RenderResult<String> {
    if query.select_elements().is_empty() {
        return Err(RenderError::EmptyProjection);
    }
    log::debug!(
        "渲染 {} 查询: 驱动别名 {:?}, 分区首次读取 {}",
        dialect,
        query.driving_alias(),
        options.first_fetch.is_some()
    );
    match dialect {
        Dialect::DocumentDb => docdb::render(query, options.first_fetch),
        Dialect::JsonServer => json_server::render(query, options.first_fetch),
    }
}

/// 渲染 SELECT 中的主表达式；整文档引用交给 `document` 决定写法
fn render_primary(
    visitor: &mut QueryStringVisitor,
    expression: &Expression,
    document: impl Fn(&str) -> String,
) -> RenderResult<String> {
    match expression {
        Expression::ColumnRef { table, path } if path.is_empty() => Ok(document(table)),
        primary if primary.is_primary() => Ok(visitor.invoke(primary)),
        other => Err(RenderError::UnsupportedExpression(other.kind_name().to_string())),
    }
}

/// 两种方言共同的投影检查：`*` 的表达式列表必须为 `None`，空列表也不行
fn check_wildcard(element: &SelectElement) -> RenderResult<()> {
    if element.is_wildcard() && element.expressions.is_some() {
        return Err(RenderError::WildcardWithAlias);
    }
    Ok(())
}
