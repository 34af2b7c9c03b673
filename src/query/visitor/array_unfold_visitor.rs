//! ArrayUnfoldVisitor - JsonServer 方言的多值属性展开
//!
//! JsonServer 把顶点属性存成带标签的值数组，引用时需要展开：
//! `N_18.age` -> `N_18.age.*._value`

use std::collections::HashSet;

use crate::core::types::expression::{Expression, ExpressionRewriter, PathSegment};
use crate::query::visitor::VALUE_FIELD;

#[derive(Debug, Default)]
pub struct ArrayUnfoldVisitor {
    flat_properties: HashSet<String>,
    skip_tables: HashSet<String>,
}

impl ArrayUnfoldVisitor {
    pub fn new(flat_properties: &HashSet<String>) -> Self {
        Self {
            flat_properties: flat_properties.clone(),
            skip_tables: HashSet::new(),
        }
    }

    pub fn add_skip_table_name(&mut self, table: Option<&str>) {
        if let Some(table) = table {
            self.skip_tables.insert(table.to_string());
        }
    }

    pub fn invoke(&mut self, expression: &mut Expression) {
        self.rewrite(expression);
    }
}

impl ExpressionRewriter for ArrayUnfoldVisitor {
    fn rewrite_column_ref(&mut self, table: &mut String, path: &mut Vec<PathSegment>) {
        if self.skip_tables.contains(table.as_str()) {
            return;
        }
        let unfold = matches!(
            path.first(),
            Some(PathSegment::Member(property)) if !self.flat_properties.contains(property)
        );
        if unfold {
            path.splice(
                1..1,
                [
                    PathSegment::Wildcard,
                    PathSegment::Member(VALUE_FIELD.to_string()),
                ],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor() -> ArrayUnfoldVisitor {
        let flat: HashSet<String> = ["id".to_string(), "label".to_string()].into_iter().collect();
        let mut visitor = ArrayUnfoldVisitor::new(&flat);
        visitor.add_skip_table_name(Some("E_0"));
        visitor
    }

    #[test]
    fn test_unfolds_nested_property() {
        let mut expr = Expression::column("N_18", "age");
        visitor().invoke(&mut expr);
        assert_eq!(
            expr,
            Expression::column_path(
                "N_18",
                vec![
                    PathSegment::Member("age".to_string()),
                    PathSegment::Wildcard,
                    PathSegment::Member("_value".to_string()),
                ],
            )
        );
    }

    #[test]
    fn test_flat_skipped_and_document_untouched() {
        for original in [
            Expression::column("N_0", "id"),
            Expression::column("E_0", "weight"),
            Expression::document("N_0"),
        ] {
            let mut expr = original.clone();
            visitor().invoke(&mut expr);
            assert_eq!(expr, original);
        }
    }
}
