// ==========================================
// 航线网络利润模拟 - 航线消费顺序
// ==========================================
// 用途：图驱动模式下决定按何种顺序由航线生成航班
// ==========================================

use serde::{Deserialize, Serialize};

/// 航线消费顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeOrder {
    /// 按距离升序（等距保持插入顺序）
    Sorted,
    /// 按建边顺序
    Insertion,
}

impl EdgeOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeOrder::Sorted => "sorted",
            EdgeOrder::Insertion => "insertion",
        }
    }
}

impl Default for EdgeOrder {
    fn default() -> Self {
        EdgeOrder::Sorted
    }
}

impl std::fmt::Display for EdgeOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EdgeOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sorted" | "by_distance" | "by-distance" => Ok(EdgeOrder::Sorted),
            "insertion" | "insertion_order" | "insertion-order" => Ok(EdgeOrder::Insertion),
            other => Err(format!("未知航线顺序: {}", other)),
        }
    }
}
