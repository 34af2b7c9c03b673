//! 操作符类型定义
//!
//! 谓词树中使用的比较操作符与布尔连接符

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// 操作符特征定义
pub trait Operator {
    /// 获取操作符在查询文本中的写法
    fn name(&self) -> &str;
}

/// 比较操作符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl ComparisonOperator {
    /// 根据比较结果求值
    pub fn evaluate(&self, ordering: Ordering) -> bool {
        match self {
            ComparisonOperator::Equal => ordering == Ordering::Equal,
            ComparisonOperator::NotEqual => ordering != Ordering::Equal,
            ComparisonOperator::LessThan => ordering == Ordering::Less,
            ComparisonOperator::LessThanOrEqual => ordering != Ordering::Greater,
            ComparisonOperator::GreaterThan => ordering == Ordering::Greater,
            ComparisonOperator::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }
}

impl Operator for ComparisonOperator {
    fn name(&self) -> &str {
        match self {
            ComparisonOperator::Equal => "=",
            ComparisonOperator::NotEqual => "!=",
            ComparisonOperator::LessThan => "<",
            ComparisonOperator::LessThanOrEqual => "<=",
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::GreaterThanOrEqual => ">=",
        }
    }
}

/// 布尔连接符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BooleanOperator {
    And,
    Or,
}

impl Operator for BooleanOperator {
    fn name(&self) -> &str {
        match self {
            BooleanOperator::And => "AND",
            BooleanOperator::Or => "OR",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for BooleanOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
