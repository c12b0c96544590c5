// ==========================================
// 航线网络利润模拟 - 飞行员分配
// ==========================================
// 规则: 小型 -> 初级, 中型 -> 中级, 大型 -> 高级
// 成本: 对应资历的外部配置薪资
// 红线: 纯函数，无随机性
// ==========================================

use crate::domain::pilot::{AircraftPilot, PilotPayTiers};
use crate::domain::types::{AircraftSize, SeniorityTier};

// ==========================================
// PilotBuilder - 飞行员分配引擎
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct PilotBuilder {
    pay_tiers: PilotPayTiers,
}

impl PilotBuilder {
    pub fn new(pay_tiers: PilotPayTiers) -> Self {
        Self { pay_tiers }
    }

    /// 为机型分配飞行员
    ///
    /// # 返回
    /// 资历 + 单次飞行成本
    pub fn assign_pilot_to_aircraft(&self, aircraft_size: AircraftSize) -> AircraftPilot {
        let seniority = SeniorityTier::for_aircraft(aircraft_size);
        AircraftPilot {
            seniority,
            cost_per_flight: self.pay_tiers.pay_for(seniority),
        }
    }

    pub fn pay_tiers(&self) -> &PilotPayTiers {
        &self.pay_tiers
    }
}

impl Default for PilotBuilder {
    fn default() -> Self {
        Self::new(PilotPayTiers::default())
    }
}
