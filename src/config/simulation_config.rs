// ==========================================
// 航线网络利润模拟 - 模拟配置
// ==========================================
// 职责: 将运行时属性解析为强类型配置
// 红线: 缺失或非法的配置项回退到内置默认值，永不失败
// ==========================================

use super::properties::RuntimeProperties;
use crate::domain::flight::{sections_revenue, FlightRecord, FlightValidationError, SeatSection};
use crate::domain::pilot::PilotPayTiers;
use crate::domain::types::{AircraftSize, Distance, SECTION_COUNT};
use crate::engine::strategy::EdgeOrder;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use tracing::{debug, warn};

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    pub const JUNIOR_PILOT_PAY: &str = "JUNIOR_PILOT_PAY";
    pub const MIDLEVEL_PILOT_PAY: &str = "MIDLEVEL_PILOT_PAY";
    pub const SENIOR_PILOT_PAY: &str = "SENIOR_PILOT_PAY";
    pub const FLIGHT_AIRCRAFT_SIZE: &str = "FLIGHT_AIRCRAFT_SIZE";
    pub const EDGE_ORDER: &str = "EDGE_ORDER";

    /// 舱段最大座位数键（section 从 1 开始）
    pub fn section_max_seats(section: usize) -> String {
        format!("SECTION_{}_MAX_SEATS", section)
    }

    /// 舱段已售座位数键
    pub fn section_seats_filled(section: usize) -> String {
        format!("SECTION_{}_SEATS_FILLED", section)
    }

    /// 舱段票价键
    pub fn section_seat_price(section: usize) -> String {
        format!("SECTION_{}_SEAT_PRICE", section)
    }
}

// ==========================================
// FlightTemplate - 图驱动航班模板
// ==========================================
// 由图边生成航班时，机型与舱段数据取自此模板
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightTemplate {
    pub aircraft_size: AircraftSize,
    pub sections: [SeatSection; SECTION_COUNT],
}

impl FlightTemplate {
    /// 校验全部舱段
    pub fn validate(&self) -> Result<(), FlightValidationError> {
        for (idx, section) in self.sections.iter().enumerate() {
            section.validate(idx + 1)?;
        }
        if sections_revenue(&self.sections).is_none() {
            return Err(FlightValidationError::FlightRevenueOverflow);
        }
        Ok(())
    }

    /// 以模板数据生成一条航班
    pub fn materialize(
        &self,
        source: &str,
        destination: &str,
        distance: Distance,
    ) -> Result<FlightRecord, FlightValidationError> {
        FlightRecord::new(source, destination, distance, self.aircraft_size, self.sections)
    }
}

impl Default for FlightTemplate {
    fn default() -> Self {
        Self {
            aircraft_size: AircraftSize::Large,
            sections: [
                SeatSection::new(10, 10, dec!(100.00)),
                SeatSection::new(20, 15, dec!(80.00)),
                SeatSection::new(30, 30, dec!(50.00)),
                SeatSection::new(40, 40, dec!(30.00)),
            ],
        }
    }
}

// ==========================================
// SimulationConfig - 模拟配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SimulationConfig {
    pub pilot_pay: PilotPayTiers,
    pub flight_template: FlightTemplate,
    pub edge_order: EdgeOrder,
}

impl SimulationConfig {
    /// 从运行时属性构建配置
    ///
    /// # 回退规则
    /// - 缺失键: 使用默认值（debug 日志）
    /// - 非法值: 使用默认值（warn 日志）
    /// - 已售座位超过最大座位的模板: 整体回退默认模板（warn 日志）
    pub fn from_properties(props: &RuntimeProperties) -> Self {
        let defaults = SimulationConfig::default();

        let pilot_pay = PilotPayTiers {
            junior: read_pay(props, config_keys::JUNIOR_PILOT_PAY, defaults.pilot_pay.junior),
            mid: read_pay(props, config_keys::MIDLEVEL_PILOT_PAY, defaults.pilot_pay.mid),
            senior: read_pay(props, config_keys::SENIOR_PILOT_PAY, defaults.pilot_pay.senior),
        };

        let default_template = defaults.flight_template;
        let aircraft_size = read_or_default(
            props,
            config_keys::FLIGHT_AIRCRAFT_SIZE,
            default_template.aircraft_size,
        );
        let sections = std::array::from_fn(|i| {
            let section = i + 1;
            let fallback = default_template.sections[i];
            SeatSection::new(
                read_or_default(
                    props,
                    &config_keys::section_max_seats(section),
                    fallback.max_seats,
                ),
                read_or_default(
                    props,
                    &config_keys::section_seats_filled(section),
                    fallback.seats_filled,
                ),
                read_pay(
                    props,
                    &config_keys::section_seat_price(section),
                    fallback.seat_price,
                ),
            )
        });

        let mut flight_template = FlightTemplate {
            aircraft_size,
            sections,
        };
        if let Err(e) = flight_template.validate() {
            warn!("航班模板配置无效 ({}), 回退默认模板", e);
            flight_template = FlightTemplate {
                aircraft_size,
                sections: default_template.sections,
            };
        }

        let edge_order = read_or_default(props, config_keys::EDGE_ORDER, defaults.edge_order);

        Self {
            pilot_pay,
            flight_template,
            edge_order,
        }
    }
}

/// 读取并解析单个配置项，失败时回退默认值
fn read_or_default<T>(props: &RuntimeProperties, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match props.get(key) {
        None => {
            debug!("配置项 {} 缺失, 使用默认值 {}", key, default);
            default
        }
        Some(raw) => match raw.parse::<T>() {
            Ok(value) => value,
            Err(e) => {
                warn!("配置项 {}={} 无法解析 ({}), 使用默认值 {}", key, raw, e, default);
                default
            }
        },
    }
}

/// 读取金额配置项，负数视为非法
fn read_pay(props: &RuntimeProperties, key: &str, default: Decimal) -> Decimal {
    let value = read_or_default(props, key, default);
    if value < Decimal::ZERO {
        warn!("配置项 {} 不能为负数: {}, 使用默认值 {}", key, value, default);
        return default;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_properties_yield_defaults() {
        let config = SimulationConfig::from_properties(&RuntimeProperties::default());
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.pilot_pay.senior, dec!(300.00));
        assert_eq!(config.edge_order, EdgeOrder::Sorted);
    }

    #[test]
    fn test_overrides_and_invalid_values() {
        let props = RuntimeProperties::parse(
            "JUNIOR_PILOT_PAY = 80.50\n\
             MIDLEVEL_PILOT_PAY = abc\n\
             SENIOR_PILOT_PAY = -5\n\
             FLIGHT_AIRCRAFT_SIZE = s\n\
             SECTION_2_SEAT_PRICE = 99.99\n\
             EDGE_ORDER = insertion\n",
        );
        let config = SimulationConfig::from_properties(&props);

        assert_eq!(config.pilot_pay.junior, dec!(80.50));
        assert_eq!(config.pilot_pay.mid, dec!(200.00));
        assert_eq!(config.pilot_pay.senior, dec!(300.00));
        assert_eq!(config.flight_template.aircraft_size, AircraftSize::Small);
        assert_eq!(config.flight_template.sections[1].seat_price, dec!(99.99));
        assert_eq!(config.edge_order, EdgeOrder::Insertion);
    }

    #[test]
    fn test_overfilled_template_falls_back() {
        let props = RuntimeProperties::parse("SECTION_1_SEATS_FILLED=11\nFLIGHT_AIRCRAFT_SIZE=m\n");
        let config = SimulationConfig::from_properties(&props);

        assert_eq!(config.flight_template.sections, FlightTemplate::default().sections);
        assert_eq!(config.flight_template.aircraft_size, AircraftSize::Medium);
    }

    #[test]
    fn test_unrepresentable_template_revenue_falls_back() {
        let mut props = RuntimeProperties::default();
        props.set(
            config_keys::section_seat_price(4),
            Decimal::MAX.to_string(),
        );
        let config = SimulationConfig::from_properties(&props);

        assert_eq!(config.flight_template.sections, FlightTemplate::default().sections);
        assert!(config.flight_template.validate().is_ok());
    }
}
