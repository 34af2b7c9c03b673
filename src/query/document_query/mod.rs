//! 文档查询中间表示
//!
//! 与方言无关的单次读取描述：驱动别名、SELECT 投影、标量属性集合、
//! 连接字典、WHERE 谓词和集合名。同一个实例可以分别交给两种方言渲染，
//! 渲染过程不会修改它。

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::error::CompileResult;
use crate::core::types::expression::Expression;
use crate::core::types::operators::BooleanOperator;

mod lowering;

pub use lowering::{lower, lower_variable};

/// 投影中代表整个文档的键
pub const WILDCARD: &str = "*";

/// SELECT 子句中的一项
///
/// `expressions` 为空时按裸标识符输出，否则把这些主表达式拼接后以 `name` 为别名
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectElement {
    pub name: String,
    pub expressions: Option<Vec<Expression>>,
}

impl SelectElement {
    pub fn is_wildcard(&self) -> bool {
        self.name == WILDCARD
    }

    /// 带有非空表达式列表
    pub fn has_expressions(&self) -> bool {
        self.expressions.as_ref().is_some_and(|list| !list.is_empty())
    }
}

/// 文档查询
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentQuery {
    pub node_alias: Option<String>,
    pub edge_alias: Option<String>,
    /// 按插入顺序排列的投影
    select: Vec<SelectElement>,
    /// 已知为标量的属性名
    pub flat_properties: HashSet<String>,
    /// 额外的连接：`(别名, 来源表达式)`，按插入顺序
    joins: Vec<(String, String)>,
    predicate: Option<Expression>,
    /// 仅 JsonServer 方言需要
    pub collection_name: Option<String>,
}

impl DocumentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// 驱动别名：`node_alias ?? edge_alias`
    pub fn driving_alias(&self) -> Option<&str> {
        self.node_alias.as_deref().or(self.edge_alias.as_deref())
    }

    /// 追加投影项，同名项原位替换
    pub fn add_select_element(
        &mut self,
        name: impl Into<String>,
        expressions: Option<Vec<Expression>>,
    ) {
        let name = name.into();
        match self.select.iter_mut().find(|element| element.name == name) {
            Some(element) => element.expressions = expressions,
            None => self.select.push(SelectElement { name, expressions }),
        }
    }

    /// 清空投影，之后需要重新添加
    pub fn clear_select(&mut self) {
        self.select.clear();
    }

    pub fn select_elements(&self) -> &[SelectElement] {
        &self.select
    }

    /// 登记连接，同名别名覆盖来源
    pub fn add_join(&mut self, alias: impl Into<String>, source: impl Into<String>) {
        let alias = alias.into();
        let source = source.into();
        match self.joins.iter_mut().find(|(existing, _)| *existing == alias) {
            Some(entry) => entry.1 = source,
            None => self.joins.push((alias, source)),
        }
    }

    pub fn joins(&self) -> &[(String, String)] {
        &self.joins
    }

    pub fn predicate(&self) -> Option<&Expression> {
        self.predicate.as_ref()
    }

    /// 合并 WHERE 条件，规则同逻辑上下文：`(P) op (C)`
    pub fn where_conjunction(&mut self, condition: Expression, conjunction: BooleanOperator) {
        self.predicate = Some(Expression::conjoin(
            self.predicate.take(),
            condition,
            conjunction,
        ));
    }

    pub fn to_json(&self) -> CompileResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> CompileResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
