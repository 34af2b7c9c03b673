//! 分区谓词注入
//!
//! 把一次逻辑查询切分为多个按分区键首字母划分的子查询，供多个工作进程并行执行。

mod plan;
mod session;

pub use plan::{
    plans_from_json, plans_to_json, select_for_worker, worker_index_from_env, BetweenKind,
    PartitionCompare, PartitionMethod, PartitionPlan,
};
pub use session::{FirstFetch, PartitionSession};
