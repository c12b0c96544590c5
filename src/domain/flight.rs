// ==========================================
// 航线网络利润模拟 - 航班领域模型
// ==========================================
// 职责: 舱段 / 航班记录 / 航班目录
// 红线: 航班记录校验通过后不可变
// 红线: 金额一律使用精确十进制 (Decimal)
// ==========================================

use super::types::{AircraftSize, Distance, SECTION_COUNT};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==========================================
// FlightValidationError - 航班校验错误
// ==========================================
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlightValidationError {
    #[error("飞行距离必须为正数: {0}")]
    NonPositiveDistance(Distance),

    #[error("舱段 {section} 已售座位数 {filled} 超过最大座位数 {max}")]
    SeatsOverCapacity { section: usize, filled: u32, max: u32 },

    #[error("舱段 {section} 票价不能为负数: {price}")]
    NegativeSeatPrice { section: usize, price: Decimal },

    #[error("舱段 {section} 收入超出可表示范围: {filled} × {price}")]
    SectionRevenueOverflow {
        section: usize,
        filled: u32,
        price: Decimal,
    },

    #[error("航班总收入超出可表示范围")]
    FlightRevenueOverflow,
}

// ==========================================
// SeatSection - 舱段
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSection {
    pub max_seats: u32,     // 最大座位数
    pub seats_filled: u32,  // 已售座位数
    pub seat_price: Decimal, // 单座票价
}

impl SeatSection {
    pub fn new(max_seats: u32, seats_filled: u32, seat_price: Decimal) -> Self {
        Self {
            max_seats,
            seats_filled,
            seat_price,
        }
    }

    /// 舱段收入 = 已售座位 × 票价；溢出时返回 None
    pub fn revenue(&self) -> Option<Decimal> {
        Decimal::from(self.seats_filled).checked_mul(self.seat_price)
    }

    /// 校验单个舱段（section 为 1 起始的舱段序号，仅用于报错）
    pub fn validate(&self, section: usize) -> Result<(), FlightValidationError> {
        if self.seats_filled > self.max_seats {
            return Err(FlightValidationError::SeatsOverCapacity {
                section,
                filled: self.seats_filled,
                max: self.max_seats,
            });
        }
        if self.seat_price < Decimal::ZERO {
            return Err(FlightValidationError::NegativeSeatPrice {
                section,
                price: self.seat_price,
            });
        }
        if self.revenue().is_none() {
            return Err(FlightValidationError::SectionRevenueOverflow {
                section,
                filled: self.seats_filled,
                price: self.seat_price,
            });
        }
        Ok(())
    }
}

/// 全部舱段收入之和；任一步溢出返回 None
pub fn sections_revenue(sections: &[SeatSection]) -> Option<Decimal> {
    sections
        .iter()
        .try_fold(Decimal::ZERO, |acc, section| acc.checked_add(section.revenue()?))
}

// ==========================================
// FlightRecord - 航班记录
// ==========================================
// 只能通过 new() 构造，构造即校验
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightRecord {
    source: String,
    destination: String,
    distance: Distance,
    aircraft_size: AircraftSize,
    sections: [SeatSection; SECTION_COUNT],
}

impl FlightRecord {
    /// 创建并校验航班记录
    ///
    /// # 校验规则
    /// 1. 距离 > 0
    /// 2. 每个舱段 已售 <= 最大座位
    /// 3. 每个舱段 票价 >= 0
    /// 4. 舱段收入与航班总收入均可用 Decimal 表示
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        distance: Distance,
        aircraft_size: AircraftSize,
        sections: [SeatSection; SECTION_COUNT],
    ) -> Result<Self, FlightValidationError> {
        if distance <= 0 {
            return Err(FlightValidationError::NonPositiveDistance(distance));
        }
        for (idx, section) in sections.iter().enumerate() {
            section.validate(idx + 1)?;
        }
        if sections_revenue(&sections).is_none() {
            return Err(FlightValidationError::FlightRevenueOverflow);
        }

        Ok(Self {
            source: source.into(),
            destination: destination.into(),
            distance,
            aircraft_size,
            sections,
        })
    }

    /// 由三组并列数组创建（外部记录的字段顺序）
    pub fn from_section_columns(
        source: impl Into<String>,
        destination: impl Into<String>,
        distance: Distance,
        aircraft_size: AircraftSize,
        max_seats: [u32; SECTION_COUNT],
        seats_filled: [u32; SECTION_COUNT],
        seat_prices: [Decimal; SECTION_COUNT],
    ) -> Result<Self, FlightValidationError> {
        let sections = std::array::from_fn(|i| {
            SeatSection::new(max_seats[i], seats_filled[i], seat_prices[i])
        });
        Self::new(source, destination, distance, aircraft_size, sections)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn aircraft_size(&self) -> AircraftSize {
        self.aircraft_size
    }

    pub fn sections(&self) -> &[SeatSection; SECTION_COUNT] {
        &self.sections
    }

    /// 航班收入（构造时已校验不会溢出）
    pub fn revenue(&self) -> Option<Decimal> {
        sections_revenue(&self.sections)
    }

    /// 总已售座位数
    pub fn total_seats_filled(&self) -> u64 {
        self.sections.iter().map(|s| u64::from(s.seats_filled)).sum()
    }
}

// ==========================================
// FlightCatalog - 航班目录
// ==========================================
// 独占持有全部 FlightRecord，按加入顺序保存
#[derive(Debug, Clone, Default)]
pub struct FlightCatalog {
    flights: Vec<FlightRecord>,
}

impl FlightCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_flight(&mut self, flight: FlightRecord) {
        self.flights.push(flight);
    }

    pub fn flights(&self) -> &[FlightRecord] {
        &self.flights
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FlightRecord> {
        self.flights.iter()
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// 清空目录（航班记录唯一的销毁途径）
    pub fn clear(&mut self) {
        self.flights.clear();
    }
}

impl FromIterator<FlightRecord> for FlightCatalog {
    fn from_iter<I: IntoIterator<Item = FlightRecord>>(iter: I) -> Self {
        Self {
            flights: iter.into_iter().collect(),
        }
    }
}

impl Extend<FlightRecord> for FlightCatalog {
    fn extend<I: IntoIterator<Item = FlightRecord>>(&mut self, iter: I) {
        self.flights.extend(iter);
    }
}
