// ==========================================
// 航线网络利润模拟 - 飞行员领域模型
// ==========================================
// 职责: 飞行员资历与单次飞行成本、薪资档位配置
// 红线: 薪资为精确十进制，不经浮点
// ==========================================

use super::types::SeniorityTier;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

// ==========================================
// AircraftPilot - 已分配的飞行员
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AircraftPilot {
    pub seniority: SeniorityTier,  // 资历
    pub cost_per_flight: Decimal,  // 单次飞行成本
}

// ==========================================
// PilotPayTiers - 薪资档位
// ==========================================
// 外部配置提供；加载后只读，按引用共享
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PilotPayTiers {
    pub junior: Decimal,
    pub mid: Decimal,
    pub senior: Decimal,
}

impl PilotPayTiers {
    /// 取某资历对应的薪资
    pub fn pay_for(&self, tier: SeniorityTier) -> Decimal {
        match tier {
            SeniorityTier::Junior => self.junior,
            SeniorityTier::Mid => self.mid,
            SeniorityTier::Senior => self.senior,
        }
    }
}

impl Default for PilotPayTiers {
    fn default() -> Self {
        Self {
            junior: dec!(100.00),
            mid: dec!(200.00),
            senior: dec!(300.00),
        }
    }
}
