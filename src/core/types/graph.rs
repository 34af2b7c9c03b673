// 图相关类型定义
//
// 包含遍历编译过程中图结构相关的核心类型定义

use serde::{Deserialize, Serialize};
use std::fmt;

/// 边的方向类型
///
/// 用于表示一次跳转沿哪个方向的边进行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeDirection {
    /// 出边：从当前顶点指向邻接顶点
    Out,
    /// 入边：从邻接顶点指向当前顶点
    In,
    /// 双向：同时包含出边和入边
    Both,
}

impl EdgeDirection {
    pub fn name(&self) -> &'static str {
        match self {
            EdgeDirection::Out => "out",
            EdgeDirection::In => "in",
            EdgeDirection::Both => "both",
        }
    }
}

impl fmt::Display for EdgeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
