// ==========================================
// 航线网络利润模拟 - 导入层
// ==========================================
// 职责: 外部文本数据 -> 已校验的领域值
// 支持: 航线图描述 / 航班数据（竖线分隔）
// ==========================================

// 模块声明
pub mod error;
pub mod flight_data_parser;
pub mod pipe_reader;
pub mod route_parser;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use flight_data_parser::{
    load_flight_records, parse_flight_line, parse_flight_records, FLIGHT_FIELD_COUNT,
};
pub use pipe_reader::{ImportReport, DELIMITER};
pub use route_parser::{
    load_route_descriptions, parse_route_descriptions, parse_route_line, ROUTE_FIELD_COUNT,
};
