// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的航线图、航班构建与临时文件
// ==========================================
#![allow(dead_code)]

use airline_network::domain::{AircraftSize, Airport, FlightRecord, SeatSection, SECTION_COUNT};
use airline_network::AirportNetworkGraph;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

/// 示例场景的舱段: (10,10,100),(20,15,80),(30,30,50),(40,40,30)
pub fn scenario_sections() -> [SeatSection; SECTION_COUNT] {
    [
        SeatSection::new(10, 10, dec!(100.00)),
        SeatSection::new(20, 15, dec!(80.00)),
        SeatSection::new(30, 30, dec!(50.00)),
        SeatSection::new(40, 40, dec!(30.00)),
    ]
}

/// 创建包含指定航线的图（机场按出现顺序添加）
pub fn create_test_graph(routes: &[(&str, &str, i64)]) -> AirportNetworkGraph {
    let mut graph = AirportNetworkGraph::new();
    for (source, destination, distance) in routes {
        for name in [source, destination] {
            if !graph.is_airport_in_graph(name) {
                graph.add_airport(Airport::new(*name));
            }
        }
        graph.create_edge(source, destination, *distance);
    }
    graph
}

/// 写入临时文件
///
/// # 返回
/// - NamedTempFile: 临时文件（需要保持存活）
pub fn write_temp_file(content: &str) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}

// ==========================================
// FlightRecord 构建器
// ==========================================

pub struct FlightBuilder {
    source: String,
    destination: String,
    distance: i64,
    aircraft_size: AircraftSize,
    sections: [SeatSection; SECTION_COUNT],
}

impl FlightBuilder {
    pub fn new(source: &str, destination: &str) -> Self {
        Self {
            source: source.to_string(),
            destination: destination.to_string(),
            distance: 500,
            aircraft_size: AircraftSize::Large,
            sections: scenario_sections(),
        }
    }

    pub fn distance(mut self, distance: i64) -> Self {
        self.distance = distance;
        self
    }

    pub fn size(mut self, size: AircraftSize) -> Self {
        self.aircraft_size = size;
        self
    }

    pub fn section(mut self, idx: usize, max: u32, filled: u32, price: Decimal) -> Self {
        self.sections[idx] = SeatSection::new(max, filled, price);
        self
    }

    /// 全部舱段已售清零
    pub fn empty(mut self) -> Self {
        for section in self.sections.iter_mut() {
            section.seats_filled = 0;
        }
        self
    }

    pub fn build(self) -> FlightRecord {
        FlightRecord::new(
            self.source,
            self.destination,
            self.distance,
            self.aircraft_size,
            self.sections,
        )
        .expect("测试航班数据应合法")
    }
}
