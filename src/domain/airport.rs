// ==========================================
// 航线网络利润模拟 - 机场领域模型
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Airport - 机场
// ==========================================
// 身份 = 名称；其余属性仅作描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    pub name: String,             // 机场名称 (唯一标识)
    pub city: Option<String>,     // 所在城市
    pub country: Option<String>,  // 所在国家
}

impl Airport {
    /// 仅以名称创建机场
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: None,
            country: None,
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}
