// ==========================================
// 航线网络利润模拟 - 航班经济核算引擎
// ==========================================
// 收入: Σ 舱段 (已售座位 × 票价)
// 成本: 飞行员单次成本 + 附加成本项 (CostFactor)
// 利润: 收入 - 成本
// 红线: 全程 Decimal 精确运算，不经浮点
// 红线: 金额运算一律 checked_*，溢出返回错误而不是 panic
// ==========================================

use super::pilot_builder::PilotBuilder;
use crate::domain::flight::{FlightCatalog, FlightRecord};
use crate::domain::pilot::AircraftPilot;
use crate::domain::types::{AircraftSize, Distance};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

// ==========================================
// EconomicsError - 核算错误
// ==========================================
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EconomicsError {
    #[error("航班 {route} 收入超出可表示范围")]
    RevenueOverflow { route: String },

    #[error("航班 {route} 成本超出可表示范围 (成本项 {factor})")]
    CostOverflow { route: String, factor: String },

    #[error("航班 {route} 利润超出可表示范围")]
    ProfitOverflow { route: String },

    #[error("航班目录累计{total}超出可表示范围 (航班 {route})")]
    TotalOverflow { route: String, total: &'static str },
}

/// 错误信息中的航线标识
pub(crate) fn route_label(flight: &FlightRecord) -> String {
    format!("{}-{}", flight.source(), flight.destination())
}

// ==========================================
// Trait: CostFactor
// ==========================================
// 用途: 飞行员薪资之外的运营成本扩展点
// 默认引擎不挂载任何附加成本项
pub trait CostFactor {
    /// 成本项名称（用于日志）
    fn name(&self) -> &str;

    /// 该成本项对单个航班的成本
    fn cost(&self, flight: &FlightRecord) -> Decimal;
}

// ==========================================
// FlightProfit - 单航班核算结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightProfit {
    pub source: String,
    pub destination: String,
    pub distance: Distance,
    pub aircraft_size: AircraftSize,
    pub pilot: AircraftPilot,
    pub revenue: Decimal,
    pub cost: Decimal,
    pub profit: Decimal,
}

// ==========================================
// FlightEconomicsEngine - 经济核算引擎
// ==========================================
// 无跨运行状态：只持有配置 (薪资档位 + 附加成本项)
pub struct FlightEconomicsEngine {
    pilot_builder: PilotBuilder,
    cost_factors: Vec<Box<dyn CostFactor>>,
}

impl FlightEconomicsEngine {
    pub fn new(pilot_builder: PilotBuilder) -> Self {
        Self {
            pilot_builder,
            cost_factors: Vec::new(),
        }
    }

    /// 挂载附加成本项
    pub fn with_cost_factor(mut self, factor: Box<dyn CostFactor>) -> Self {
        self.cost_factors.push(factor);
        self
    }

    pub fn pilot_builder(&self) -> &PilotBuilder {
        &self.pilot_builder
    }

    // ==========================================
    // 单航班核算
    // ==========================================

    /// 航班收入
    pub fn flight_revenue(flight: &FlightRecord) -> Result<Decimal, EconomicsError> {
        flight.revenue().ok_or_else(|| EconomicsError::RevenueOverflow {
            route: route_label(flight),
        })
    }

    /// 航班成本 = 飞行员成本 + Σ 附加成本项
    pub fn flight_cost(&self, flight: &FlightRecord) -> Result<Decimal, EconomicsError> {
        let pilot = self
            .pilot_builder
            .assign_pilot_to_aircraft(flight.aircraft_size());
        self.cost_with_pilot(flight, &pilot)
    }

    fn cost_with_pilot(
        &self,
        flight: &FlightRecord,
        pilot: &AircraftPilot,
    ) -> Result<Decimal, EconomicsError> {
        self.cost_factors
            .iter()
            .try_fold(pilot.cost_per_flight, |acc, factor| {
                tracing::trace!(
                    factor = factor.name(),
                    source = flight.source(),
                    destination = flight.destination(),
                    "附加成本项已计入"
                );
                acc.checked_add(factor.cost(flight))
                    .ok_or_else(|| EconomicsError::CostOverflow {
                        route: route_label(flight),
                        factor: factor.name().to_string(),
                    })
            })
    }

    /// 航班利润
    pub fn flight_profit(&self, flight: &FlightRecord) -> Result<Decimal, EconomicsError> {
        Ok(self.evaluate_flight(flight)?.profit)
    }

    /// 单航班完整核算
    pub fn evaluate_flight(&self, flight: &FlightRecord) -> Result<FlightProfit, EconomicsError> {
        let pilot = self
            .pilot_builder
            .assign_pilot_to_aircraft(flight.aircraft_size());
        let revenue = Self::flight_revenue(flight)?;
        let cost = self.cost_with_pilot(flight, &pilot)?;
        let profit = revenue
            .checked_sub(cost)
            .ok_or_else(|| EconomicsError::ProfitOverflow {
                route: route_label(flight),
            })?;

        Ok(FlightProfit {
            source: flight.source().to_string(),
            destination: flight.destination().to_string(),
            distance: flight.distance(),
            aircraft_size: flight.aircraft_size(),
            pilot,
            revenue,
            cost,
            profit,
        })
    }

    // ==========================================
    // 汇总
    // ==========================================

    /// 目录内全部航班的总利润（按目录顺序累加）
    pub fn total_profit(&self, catalog: &FlightCatalog) -> Result<Decimal, EconomicsError> {
        catalog.iter().try_fold(Decimal::ZERO, |acc, flight| {
            acc.checked_add(self.flight_profit(flight)?)
                .ok_or_else(|| EconomicsError::TotalOverflow {
                    route: route_label(flight),
                    total: "利润",
                })
        })
    }
}

impl Default for FlightEconomicsEngine {
    fn default() -> Self {
        Self::new(PilotBuilder::default())
    }
}
