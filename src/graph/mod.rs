// ==========================================
// 航线网络利润模拟 - 机场网络图
// ==========================================
// 职责: 机场顶点 / 航线边的维护与连通查询
// 输出: 按距离排序的边序列、邻接表文本
// ==========================================

mod core;
mod edge;

#[cfg(test)]
mod tests;

pub use self::core::{AdjacencyEntry, AirportNetworkGraph};
pub use self::edge::{Edge, EdgeId, EdgeRejection};
