// ==========================================
// 航线网络利润模拟 - 核心库
// ==========================================
// 机场网络图 + 航班经济核算
// 系统定位: 单线程、同步、无持久化
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 网络图 - 机场与航线
pub mod graph;

// 引擎层 - 飞行员分配 / 经济核算 / 模拟编排
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 运行时属性
pub mod config;

// 日志系统
pub mod logging;

// 性能日志
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    AircraftPilot, AircraftSize, Airport, Distance, FlightCatalog, FlightRecord,
    FlightValidationError, PilotPayTiers, RouteDescription, SeatSection, SeniorityTier,
    SECTION_COUNT,
};

// 网络图
pub use graph::{AirportNetworkGraph, Edge, EdgeId, EdgeRejection};

// 引擎
pub use engine::{
    format_currency, AirlineSimulation, AirlineSimulationBuilder, CostFactor, EconomicsError, EdgeOrder,
    FlightEconomicsEngine, FlightProfit, NoOpEventSink, PilotBuilder, RecordingEventSink,
    SimulationEvent, SimulationEventSink, SimulationMode,
};

// 配置
pub use config::{FlightTemplate, RuntimeProperties, SimulationConfig};

// 导入
pub use importer::{ImportError, ImportReport, ImportResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "航线网络利润模拟";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
