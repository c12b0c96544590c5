// ==========================================
// 航线网络利润模拟 - 机场网络图
// ==========================================
// 结构: 无向 / 简单 / 正权图，显式邻接表实现
// 红线: 任意两机场之间至多一条边，无自环，权重 > 0
// 红线: 删除机场即删除其全部关联边
// 红线: 非法输入一律拒绝（false / 空操作），不 panic
// ==========================================

use super::edge::{Edge, EdgeId, EdgeRejection};
use crate::domain::airport::Airport;
use crate::domain::types::Distance;
use std::collections::{BTreeMap, HashMap};
use std::fmt::{self, Write as _};
use tracing::debug;

/// 邻接表中的一行：机场及其邻居（邻居名, 距离）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyEntry {
    pub airport: String,
    pub neighbors: Vec<(String, Distance)>,
}

// ==========================================
// AirportNetworkGraph - 机场网络图
// ==========================================
// 单写者：不做内部加锁，并发写由调用方串行化
#[derive(Debug, Clone, Default)]
pub struct AirportNetworkGraph {
    // 名称 -> 机场（独占持有）
    airports: HashMap<String, Airport>,
    // 顶点插入顺序，用于确定性输出
    vertex_order: Vec<String>,
    // 顶点 -> 关联边（按插入顺序）
    incidence: HashMap<String, Vec<EdgeId>>,
    // 边表（EdgeId 递增，BTreeMap 迭代即插入顺序）
    edges: BTreeMap<EdgeId, Edge>,
    // 无序端点对 -> 边
    pair_index: HashMap<(String, String), EdgeId>,
    next_edge_id: u64,
}

/// 无序端点对的规范化键
fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

impl AirportNetworkGraph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================
    // 顶点操作
    // ==========================================

    /// 添加机场（幂等）
    ///
    /// 同名机场重复添加时覆盖属性，不产生新顶点
    pub fn add_airport(&mut self, airport: Airport) {
        let name = airport.name.clone();
        if !self.airports.contains_key(&name) {
            self.vertex_order.push(name.clone());
            self.incidence.insert(name.clone(), Vec::new());
        }
        self.airports.insert(name, airport);
    }

    /// 删除机场及其全部关联边；机场不存在时为空操作
    pub fn remove_airport(&mut self, name: &str) {
        if self.airports.remove(name).is_none() {
            return;
        }

        let incident = self.incidence.remove(name).unwrap_or_default();
        for edge_id in incident {
            if let Some(edge) = self.edges.remove(&edge_id) {
                self.pair_index.remove(&pair_key(&edge.source, &edge.destination));
                if let Some(other) = edge.other_endpoint(name) {
                    if let Some(list) = self.incidence.get_mut(other) {
                        list.retain(|id| *id != edge_id);
                    }
                }
            }
        }

        self.vertex_order.retain(|v| v != name);
    }

    pub fn is_airport_in_graph(&self, name: &str) -> bool {
        self.airports.contains_key(name)
    }

    pub fn get_airport(&self, name: &str) -> Option<&Airport> {
        self.airports.get(name)
    }

    /// 机场名称（插入顺序）
    pub fn airport_names(&self) -> &[String] {
        &self.vertex_order
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    // ==========================================
    // 边操作
    // ==========================================

    /// 建边，返回具体拒绝原因
    ///
    /// # 拒绝条件（按检查顺序）
    /// 1. 起点 == 终点
    /// 2. 距离 <= 0
    /// 3. 任一端点不在图中
    /// 4. 两点已连通
    pub fn try_create_edge(
        &mut self,
        source: &str,
        destination: &str,
        distance: Distance,
    ) -> Result<EdgeId, EdgeRejection> {
        if source == destination {
            return Err(EdgeRejection::SelfLoop(source.to_string()));
        }
        if distance <= 0 {
            return Err(EdgeRejection::NonPositiveDistance {
                origin: source.to_string(),
                destination: destination.to_string(),
                distance,
            });
        }
        for endpoint in [source, destination] {
            if !self.is_airport_in_graph(endpoint) {
                return Err(EdgeRejection::UnknownAirport(endpoint.to_string()));
            }
        }

        let key = pair_key(source, destination);
        if self.pair_index.contains_key(&key) {
            return Err(EdgeRejection::DuplicateEdge {
                origin: source.to_string(),
                destination: destination.to_string(),
            });
        }

        let edge_id = EdgeId(self.next_edge_id);
        self.next_edge_id += 1;

        self.edges.insert(
            edge_id,
            Edge {
                id: edge_id,
                source: source.to_string(),
                destination: destination.to_string(),
                distance,
            },
        );
        self.pair_index.insert(key, edge_id);
        for endpoint in [source, destination] {
            self.incidence
                .entry(endpoint.to_string())
                .or_default()
                .push(edge_id);
        }

        Ok(edge_id)
    }

    /// 建边；被拒时返回 false 且图不变
    pub fn create_edge(&mut self, source: &str, destination: &str, distance: Distance) -> bool {
        match self.try_create_edge(source, destination, distance) {
            Ok(_) => true,
            Err(reason) => {
                debug!(%reason, "非法航线输入，已忽略");
                false
            }
        }
    }

    /// 删除两机场之间的边；不存在时为空操作
    pub fn remove_edge(&mut self, source: &str, destination: &str) {
        let Some(edge_id) = self.pair_index.remove(&pair_key(source, destination)) else {
            return;
        };
        self.edges.remove(&edge_id);
        for endpoint in [source, destination] {
            if let Some(list) = self.incidence.get_mut(endpoint) {
                list.retain(|id| *id != edge_id);
            }
        }
    }

    pub fn are_airports_connected(&self, source: &str, destination: &str) -> bool {
        source != destination && self.pair_index.contains_key(&pair_key(source, destination))
    }

    /// 两机场之间的距离；未连通返回 None
    pub fn distance_between(&self, source: &str, destination: &str) -> Option<Distance> {
        if source == destination {
            return None;
        }
        self.pair_index
            .get(&pair_key(source, destination))
            .and_then(|id| self.edges.get(id))
            .map(|edge| edge.distance)
    }

    /// 两机场之间的距离；未连通返回 0
    ///
    /// 边权恒为正，0 只可能表示“未连通”
    pub fn get_distance(&self, source: &str, destination: &str) -> Distance {
        self.distance_between(source, destination).unwrap_or(0)
    }

    /// 全部边（插入顺序）
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 按距离升序排列的全部边
    ///
    /// 等距边保持插入顺序（稳定排序）
    pub fn get_sorted_list_of_edges(&self) -> Vec<&Edge> {
        let mut sorted: Vec<&Edge> = self.edges.values().collect();
        sorted.sort_by_key(|edge| edge.distance);
        sorted
    }

    // ==========================================
    // 输出
    // ==========================================

    /// 邻接表：每个机场（插入顺序）及其邻居
    ///
    /// 无向边在两个端点下各列一次，邻居取“另一端”
    pub fn adjacency(&self) -> Vec<AdjacencyEntry> {
        self.vertex_order
            .iter()
            .map(|vertex| {
                let neighbors = self
                    .incidence
                    .get(vertex)
                    .map(|ids| {
                        ids.iter()
                            .filter_map(|id| self.edges.get(id))
                            .filter_map(|edge| {
                                edge.other_endpoint(vertex)
                                    .map(|other| (other.to_string(), edge.distance))
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                AdjacencyEntry {
                    airport: vertex.clone(),
                    neighbors,
                }
            })
            .collect()
    }

    /// 可读的邻接表文本
    ///
    /// ```text
    /// Vertex: A
    ///     -> B(500)
    /// ```
    pub fn print_graph(&self) -> String {
        let mut out = String::new();
        for entry in self.adjacency() {
            let _ = writeln!(out, "Vertex: {}", entry.airport);
            for (neighbor, distance) in entry.neighbors {
                let _ = writeln!(out, "    -> {}({})", neighbor, distance);
            }
        }
        out
    }

    /// 清空为一张空图
    pub fn clear_graph(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for AirportNetworkGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print_graph())
    }
}
