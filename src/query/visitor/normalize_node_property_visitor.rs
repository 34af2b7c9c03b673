//! NormalizeNodePropertyVisitor - 把嵌套顶点属性改写为隐式连接变量
//!
//! 文档存储中顶点属性是 `{ "_value": ... }` 对象数组，直接引用
//! `N_0.age` 无法比较。本遍历把这类引用改写为 `N_0_0._value`，
//! 并记录 `N_0_0 -> N_0['age']`，渲染器据此生成 JOIN。

use std::collections::{HashMap, HashSet};

use crate::core::types::expression::{Expression, ExpressionRewriter, PathSegment};
use crate::query::visitor::VALUE_FIELD;

/// 本次遍历发现的隐式连接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyJoin {
    /// 隐式连接变量名
    pub variable: String,
    /// 属性所属的别名
    pub table: String,
    /// 被展开的属性名
    pub property: String,
}

/// 顶点属性路径规范化访问器
#[derive(Debug, Default)]
pub struct NormalizeNodePropertyVisitor {
    flat_properties: HashSet<String>,
    skip_tables: HashSet<String>,
    joins: Vec<PropertyJoin>,
    lookup: HashMap<(String, String), String>,
}

impl NormalizeNodePropertyVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加标量属性，这些属性保持原样引用
    pub fn add_flat_properties<'a>(&mut self, properties: impl IntoIterator<Item = &'a String>) {
        self.flat_properties.extend(properties.into_iter().cloned());
    }

    /// 添加跳过的别名（边别名的属性从不嵌套）
    pub fn add_skip_table_name(&mut self, table: Option<&str>) {
        if let Some(table) = table {
            self.skip_tables.insert(table.to_string());
        }
    }

    /// 执行遍历，返回按发现顺序排列的隐式连接
    pub fn invoke(&mut self, expression: &mut Expression) -> Vec<PropertyJoin> {
        self.joins.clear();
        self.lookup.clear();
        self.rewrite(expression);
        std::mem::take(&mut self.joins)
    }

    fn join_variable(&mut self, table: &str, property: &str) -> String {
        let key = (table.to_string(), property.to_string());
        if let Some(variable) = self.lookup.get(&key) {
            return variable.clone();
        }
        let variable = format!("{}_{}", table, self.joins.len());
        self.joins.push(PropertyJoin {
            variable: variable.clone(),
            table: table.to_string(),
            property: property.to_string(),
        });
        self.lookup.insert(key, variable.clone());
        variable
    }
}

impl ExpressionRewriter for NormalizeNodePropertyVisitor {
    fn rewrite_column_ref(&mut self, table: &mut String, path: &mut Vec<PathSegment>) {
        if self.skip_tables.contains(table.as_str()) {
            return;
        }
        let property = match path.first() {
            Some(PathSegment::Member(property)) if !self.flat_properties.contains(property) => {
                property.clone()
            }
            _ => return,
        };
        let variable = self.join_variable(table, &property);
        *table = variable;
        path[0] = PathSegment::Member(VALUE_FIELD.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::operators::BooleanOperator;

    fn visitor() -> NormalizeNodePropertyVisitor {
        let mut visitor = NormalizeNodePropertyVisitor::new();
        visitor.add_flat_properties(&["id".to_string(), "label".to_string()]);
        visitor.add_skip_table_name(Some("E_0"));
        visitor
    }

    #[test]
    fn test_nested_property_becomes_join() {
        let mut expr = Expression::eq(Expression::column("N_1", "name"), Expression::literal("josh"));
        let joins = visitor().invoke(&mut expr);

        assert_eq!(
            joins,
            vec![PropertyJoin {
                variable: "N_1_0".to_string(),
                table: "N_1".to_string(),
                property: "name".to_string(),
            }]
        );
        assert_eq!(
            expr,
            Expression::eq(Expression::column("N_1_0", "_value"), Expression::literal("josh"))
        );
    }

    #[test]
    fn test_same_property_shares_one_join() {
        let age = || Expression::column("N_0", "age");
        let mut expr = Expression::conjoin(
            Some(Expression::compare(age(), crate::core::ComparisonOperator::GreaterThan, Expression::literal(20))),
            Expression::compare(age(), crate::core::ComparisonOperator::LessThan, Expression::literal(40)),
            BooleanOperator::And,
        );
        let joins = visitor().invoke(&mut expr);
        assert_eq!(joins.len(), 1);
    }

    #[test]
    fn test_flat_and_skipped_columns_untouched() {
        let mut expr = Expression::conjoin(
            Some(Expression::eq(Expression::column("N_0", "label"), Expression::literal("person"))),
            Expression::eq(Expression::column("E_0", "weight"), Expression::literal(0.5)),
            BooleanOperator::And,
        );
        let original = expr.clone();
        let joins = visitor().invoke(&mut expr);
        assert!(joins.is_empty());
        assert_eq!(expr, original);
    }

    #[test]
    fn test_nested_path_keeps_tail() {
        let mut expr = Expression::column_path(
            "N_0",
            vec![
                PathSegment::Member("address".to_string()),
                PathSegment::Member("city".to_string()),
            ],
        );
        visitor().invoke(&mut expr);
        assert_eq!(
            expr,
            Expression::column_path(
                "N_0_0",
                vec![
                    PathSegment::Member("_value".to_string()),
                    PathSegment::Member("city".to_string()),
                ],
            )
        );
    }
}
