use super::types::Distance;
use serde::{Deserialize, Serialize};

/// 图描述中的一条航线：(机场, 机场, 距离)
///
/// 距离在此不做校验，由网络图建边时决定接受或拒绝
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescription {
    pub source: String,
    pub destination: String,
    pub distance: Distance,
}

impl RouteDescription {
    pub fn new(source: impl Into<String>, destination: impl Into<String>, distance: Distance) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            distance,
        }
    }
}
