// ==========================================
// 航线网络利润模拟 - 配置层
// ==========================================
// 职责: 运行时属性加载、默认值回退、强类型模拟配置
// 来源: 属性文件（key=value），缺失时使用内置默认值
// ==========================================

pub mod defaults;
pub mod properties;
pub mod simulation_config;

// 重导出核心配置类型
pub use defaults::{DefaultPaths, DefaultsLoader, DEFAULTS_DIR_NAME};
pub use properties::{
    create_runtime_properties, load_default_properties, load_runtime_properties,
    RuntimeProperties,
};
pub use simulation_config::{config_keys, FlightTemplate, SimulationConfig};
