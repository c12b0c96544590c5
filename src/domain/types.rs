// ==========================================
// 航线网络利润模拟 - 领域类型定义
// ==========================================
// 机型尺寸 / 飞行员资历 / 距离 / 舱段数量
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 航段距离（图边权重 / 航班飞行距离）
///
/// 合法值恒为正数；0 在图查询中表示“未连通”。
pub type Distance = i64;

/// 每个航班的舱段数量（固定约定）
pub const SECTION_COUNT: usize = 4;

// ==========================================
// 机型尺寸 (Aircraft Size)
// ==========================================
// 输入约定: 单字符代码 s / m / l
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AircraftSize {
    Small,  // 小型
    Medium, // 中型
    Large,  // 大型
}

impl AircraftSize {
    /// 全部机型（按尺寸升序）
    pub const ALL: [AircraftSize; 3] = [
        AircraftSize::Small,
        AircraftSize::Medium,
        AircraftSize::Large,
    ];

    /// 单字符代码
    pub fn code(&self) -> char {
        match self {
            AircraftSize::Small => 's',
            AircraftSize::Medium => 'm',
            AircraftSize::Large => 'l',
        }
    }

    /// 由单字符代码解析（大小写不敏感）
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_lowercase() {
            's' => Some(AircraftSize::Small),
            'm' => Some(AircraftSize::Medium),
            'l' => Some(AircraftSize::Large),
            _ => None,
        }
    }
}

impl fmt::Display for AircraftSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for AircraftSize {
    type Err = String;

    /// 只看首字符，"l" 与 "large" 等价
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .next()
            .and_then(AircraftSize::from_code)
            .ok_or_else(|| format!("未知机型代码: {:?}", s))
    }
}

// ==========================================
// 飞行员资历 (Seniority Tier)
// ==========================================
// 全序: Junior < Mid < Senior
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeniorityTier {
    Junior, // 初级
    Mid,    // 中级
    Senior, // 高级
}

impl SeniorityTier {
    /// 数值等级 (0 / 1 / 2)
    pub fn level(&self) -> u8 {
        match self {
            SeniorityTier::Junior => 0,
            SeniorityTier::Mid => 1,
            SeniorityTier::Senior => 2,
        }
    }

    /// 机型 -> 资历 的固定映射
    pub fn for_aircraft(size: AircraftSize) -> Self {
        match size {
            AircraftSize::Small => SeniorityTier::Junior,
            AircraftSize::Medium => SeniorityTier::Mid,
            AircraftSize::Large => SeniorityTier::Senior,
        }
    }
}

impl fmt::Display for SeniorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeniorityTier::Junior => write!(f, "JUNIOR"),
            SeniorityTier::Mid => write!(f, "MID"),
            SeniorityTier::Senior => write!(f, "SENIOR"),
        }
    }
}
