// ==========================================
// 航线网络利润模拟 - 引擎层
// ==========================================
// 职责: 飞行员分配、航班经济核算、模拟运行编排
// 红线: 引擎不做 I/O, 输入由外部加载后传入
// ==========================================

pub mod economics;
pub mod events;
pub mod pilot_builder;
pub mod report;
pub mod simulation;
pub mod strategy;

// 重导出核心引擎
pub use economics::{CostFactor, EconomicsError, FlightEconomicsEngine, FlightProfit};
pub use events::{NoOpEventSink, RecordingEventSink, SimulationEvent, SimulationEventSink};
pub use pilot_builder::PilotBuilder;
pub use report::format_currency;
pub use simulation::{AirlineSimulation, AirlineSimulationBuilder, SimulationMode};
pub use strategy::EdgeOrder;
