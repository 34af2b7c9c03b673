// 查询编译模块
//
// 遍历步骤经逻辑上下文降级为文档查询，再由各方言渲染器输出查询文本：
// - context: 遍历步骤与逻辑上下文
// - document_query: 与方言无关的查询中间表示
// - visitor: 渲染前的谓词重写遍历
// - render: DocumentDB / JsonServer 渲染
// - partition: 分区计划与首次读取令牌

pub mod compiler;
pub mod context;
pub mod document_query;
pub mod partition;
pub mod render;
pub mod visitor;

pub use compiler::QueryCompiler;
pub use context::{TraversalContext, TraversalStep};
pub use document_query::DocumentQuery;
pub use render::{render, Dialect, RenderOptions};
