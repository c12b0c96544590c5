// ==========================================
// 航线网络利润模拟 - 领域模型层
// ==========================================
// 职责: 定义领域实体与值类型
// 红线: 不含 I/O, 不含引擎逻辑
// ==========================================

pub mod airport;
pub mod flight;
pub mod pilot;
pub mod route;
pub mod types;

// 重导出核心类型
pub use airport::Airport;
pub use flight::{FlightCatalog, FlightRecord, FlightValidationError, SeatSection};
pub use pilot::{AircraftPilot, PilotPayTiers};
pub use route::RouteDescription;
pub use types::{AircraftSize, Distance, SeniorityTier, SECTION_COUNT};
