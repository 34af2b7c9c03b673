//! BracketIdentifierVisitor - 把点号成员访问改写为方括号下标
//!
//! 只作用于显式登记的别名：`E_6.label` -> `E_6["label"]`

use std::collections::HashSet;

use crate::core::types::expression::{Expression, ExpressionRewriter, PathSegment};

#[derive(Debug, Default)]
pub struct BracketIdentifierVisitor {
    /// 需要转换的别名
    needs_conversion: HashSet<String>,
}

impl BracketIdentifierVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_table_name(&mut self, table: impl Into<String>) {
        self.needs_conversion.insert(table.into());
    }

    pub fn invoke(&mut self, expression: &mut Expression) {
        if !self.needs_conversion.is_empty() {
            self.rewrite(expression);
        }
    }
}

impl ExpressionRewriter for BracketIdentifierVisitor {
    fn rewrite_column_ref(&mut self, table: &mut String, path: &mut Vec<PathSegment>) {
        if !self.needs_conversion.contains(table.as_str()) {
            return;
        }
        for segment in path.iter_mut() {
            if let PathSegment::Member(name) = segment {
                *segment = PathSegment::Key(std::mem::take(name));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_registered_alias_only() {
        let mut visitor = BracketIdentifierVisitor::new();
        visitor.add_table_name("E_6");

        let mut edge = Expression::column("E_6", "label");
        visitor.invoke(&mut edge);
        assert_eq!(
            edge,
            Expression::column_path("E_6", vec![PathSegment::Key("label".to_string())])
        );

        let mut vertex = Expression::column("N_0", "label");
        visitor.invoke(&mut vertex);
        assert_eq!(vertex, Expression::column("N_0", "label"));
    }

    #[test]
    fn test_empty_registry_is_noop() {
        let mut expr = Expression::column("E_0", "weight");
        BracketIdentifierVisitor::new().invoke(&mut expr);
        assert_eq!(expr, Expression::column("E_0", "weight"));
    }
}
