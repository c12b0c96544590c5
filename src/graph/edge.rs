use crate::domain::types::Distance;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// 边标识（单调递增，顺序即插入顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

// ==========================================
// Edge - 无向航线边
// ==========================================
// source / destination 只记录插入时的方向，语义上无向
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: String,
    pub destination: String,
    pub distance: Distance,
}

impl Edge {
    /// 相对于 vertex 的另一端点
    ///
    /// vertex 不是本边端点时返回 None
    pub fn other_endpoint(&self, vertex: &str) -> Option<&str> {
        if self.source == vertex {
            Some(&self.destination)
        } else if self.destination == vertex {
            Some(&self.source)
        } else {
            None
        }
    }
}

// ==========================================
// EdgeRejection - 建边被拒原因
// ==========================================
// 非致命：create_edge 将其压平为 false
// 注: 字段避开 `source` 命名（thiserror 会当作错误源）
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeRejection {
    #[error("起点与终点相同: {0}")]
    SelfLoop(String),

    #[error("距离必须为正数: {origin}-{destination} 距离 {distance}")]
    NonPositiveDistance {
        origin: String,
        destination: String,
        distance: Distance,
    },

    #[error("机场不在图中: {0}")]
    UnknownAirport(String),

    #[error("航线已存在: {origin}-{destination}")]
    DuplicateEdge { origin: String, destination: String },
}
