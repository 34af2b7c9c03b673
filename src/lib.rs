//! GraphView - 图遍历到文档查询的编译器
//!
//! 把一串图遍历步骤编译为文档数据库可执行的查询文本，支持 DocumentDB 风格的
//! SQL 方言和 JsonServer 方言，并可按分区键把一次查询切分给多个工作进程。

pub mod config;
pub mod core;
pub mod query;
pub mod utils;
