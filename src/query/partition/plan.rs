//! 分区计划
//!
//! 一个计划描述一个工作进程负责的数据片：按分区键首字母（不区分大小写）
//! 落在某个区间内。计划在编译该工作进程的查询前确定，之后不再修改。

use serde::{Deserialize, Serialize};

use crate::core::error::{CompileResult, PartitionError, PartitionResult};
use crate::utils::string_utils::double_quoted;

/// 首字母区间覆盖的字母数
const ALPHABET_LEN: usize = 26;

/// 分区方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartitionMethod {
    /// 比较分区键的首字母
    CompareFirstChar,
}

impl PartitionMethod {
    pub fn name(&self) -> &'static str {
        match self {
            PartitionMethod::CompareFirstChar => "CompareFirstChar",
        }
    }
}

/// 区间端点的开闭
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetweenKind {
    /// `a <= x <= b`
    IncludeBoth,
    /// `a <= x < b`
    IncludeLeft,
    /// `a < x <= b`
    IncludeRight,
    /// `a < x < b`
    ExcludeBoth,
    /// `a < x`
    Greater,
    /// `a <= x`
    GreaterOrEqual,
    /// `x < b`
    Less,
    /// `x <= b`
    LessOrEqual,
}

/// 分区比较方式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartitionCompare {
    Equal(String),
    In(Vec<String>),
    /// 单侧比较只使用对应一侧的边界
    Between {
        lower: String,
        upper: String,
        kind: BetweenKind,
    },
}

impl PartitionCompare {
    pub fn name(&self) -> &'static str {
        match self {
            PartitionCompare::Equal(_) => "Equal",
            PartitionCompare::In(_) => "In",
            PartitionCompare::Between { .. } => "Between",
        }
    }
}

/// 分区计划
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionPlan {
    pub key: String,
    pub method: PartitionMethod,
    pub compare: PartitionCompare,
}

impl PartitionPlan {
    pub fn new(
        key: impl Into<String>,
        method: PartitionMethod,
        compare: PartitionCompare,
    ) -> PartitionResult<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(PartitionError::EmptyKey);
        }
        Ok(Self {
            key,
            method,
            compare,
        })
    }

    /// 首字母区间计划的快捷构造
    pub fn between(
        key: impl Into<String>,
        lower: impl Into<String>,
        upper: impl Into<String>,
        kind: BetweenKind,
    ) -> PartitionResult<Self> {
        Self::new(
            key,
            PartitionMethod::CompareFirstChar,
            PartitionCompare::Between {
                lower: lower.into(),
                upper: upper.into(),
                kind,
            },
        )
    }

    /// 把 `a..=z` 切成 `parallelism` 段连续区间
    ///
    /// 每段跨 `26 / parallelism` 个字母，前面各段左闭右开，最后一段闭合到 `z`
    pub fn split_first_char(key: &str, parallelism: usize) -> PartitionResult<Vec<Self>> {
        if parallelism == 0 || parallelism > ALPHABET_LEN {
            return Err(PartitionError::InvalidParallelism {
                parallelism,
                max: ALPHABET_LEN,
            });
        }
        let span = ALPHABET_LEN / parallelism;
        let letter = |offset: usize| char::from(b'a' + offset as u8).to_string();

        let plans = (0..parallelism)
            .map(|index| {
                let left = index * span;
                if index + 1 == parallelism {
                    Self::between(key, letter(left), "z", BetweenKind::IncludeBoth)
                } else {
                    Self::between(key, letter(left), letter(left + span), BetweenKind::IncludeLeft)
                }
            })
            .collect::<PartitionResult<Vec<_>>>()?;

        log::info!("按首字母把分区键 {} 切分为 {} 段", key, plans.len());
        Ok(plans)
    }

    /// 把分区条件接到已渲染的 WHERE 文本后：`(<where>) AND <cond>`
    pub fn append_to_where_clause(&self, alias: &str, where_clause: &str) -> PartitionResult<String> {
        let condition = self.condition(alias)?;
        Ok(format!("({}) AND {}", where_clause, condition))
    }

    fn not_implemented(&self) -> PartitionError {
        PartitionError::NotImplemented {
            method: self.method.name(),
            compare: self.compare.name(),
        }
    }

    fn condition(&self, alias: &str) -> PartitionResult<String> {
        let (PartitionMethod::CompareFirstChar, PartitionCompare::Between { lower, upper, kind }) =
            (self.method, &self.compare)
        else {
            return Err(self.not_implemented());
        };

        let first_char = format!("LOWER(LEFT({}.{}, 1))", alias, self.key);
        let lower = double_quoted(lower);
        let upper = double_quoted(upper);
        let two_sided = |left: &str, right: &str| {
            format!("{} {} {} AND {} {} {}", lower, left, first_char, first_char, right, upper)
        };

        let condition = match kind {
            BetweenKind::IncludeBoth => two_sided("<=", "<="),
            BetweenKind::IncludeLeft => two_sided("<=", "<"),
            BetweenKind::IncludeRight => two_sided("<", "<="),
            BetweenKind::ExcludeBoth => two_sided("<", "<"),
            BetweenKind::Greater => format!("{} < {}", lower, first_char),
            BetweenKind::GreaterOrEqual => format!("{} <= {}", lower, first_char),
            BetweenKind::Less => format!("{} < {}", first_char, upper),
            BetweenKind::LessOrEqual => format!("{} <= {}", first_char, upper),
        };
        Ok(condition)
    }
}

/// 按工作进程序号选取计划，越界返回 `None`
pub fn select_for_worker(plans: &[PartitionPlan], index: usize) -> Option<&PartitionPlan> {
    plans.get(index)
}

/// 从环境变量读取工作进程序号，未设置或无法解析时为 0
pub fn worker_index_from_env(var: &str) -> usize {
    match std::env::var(var) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            log::warn!("环境变量 {} 的值 {:?} 不是有效序号，使用 0", var, value);
            0
        }),
        Err(_) => 0,
    }
}

pub fn plans_to_json(plans: &[PartitionPlan]) -> CompileResult<String> {
    Ok(serde_json::to_string(plans)?)
}

pub fn plans_from_json(json: &str) -> CompileResult<Vec<PartitionPlan>> {
    Ok(serde_json::from_str(json)?)
}
