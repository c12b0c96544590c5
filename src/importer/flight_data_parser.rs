// ==========================================
// 航线网络利润模拟 - 航班数据解析
// ==========================================
// 字段顺序（共 4 + 3×舱段数 个）:
//   source | destination | distance | aircraft_size
//   | max_seats×4 | seats_filled×4 | seat_price×4
// ==========================================

use super::error::{ImportError, ImportResult};
use super::pipe_reader::{
    expect_field_count, parse_field, read_pipe_records, read_single_record, text_field,
    ImportReport,
};
use crate::domain::flight::FlightRecord;
use crate::domain::types::{AircraftSize, Distance, SECTION_COUNT};
use csv::StringRecord;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// 航班记录字段数
pub const FLIGHT_FIELD_COUNT: usize = 4 + 3 * SECTION_COUNT;

const MAX_SEATS_OFFSET: usize = 4;
const SEATS_FILLED_OFFSET: usize = MAX_SEATS_OFFSET + SECTION_COUNT;
const SEAT_PRICE_OFFSET: usize = SEATS_FILLED_OFFSET + SECTION_COUNT;

/// 将一条记录转换为航班
fn record_to_flight(line: u64, record: &StringRecord) -> ImportResult<FlightRecord> {
    expect_field_count(line, record, FLIGHT_FIELD_COUNT)?;

    let source = text_field(line, record, 0, "source")?;
    let destination = text_field(line, record, 1, "destination")?;
    let distance: Distance = parse_field(line, record, 2, "distance")?;
    let aircraft_size: AircraftSize = parse_field(line, record, 3, "aircraft_size")?;

    let mut max_seats = [0u32; SECTION_COUNT];
    let mut seats_filled = [0u32; SECTION_COUNT];
    let mut seat_prices = [Decimal::ZERO; SECTION_COUNT];
    for i in 0..SECTION_COUNT {
        let section = i + 1;
        max_seats[i] = parse_field(
            line,
            record,
            MAX_SEATS_OFFSET + i,
            &format!("max_seats_{}", section),
        )?;
        seats_filled[i] = parse_field(
            line,
            record,
            SEATS_FILLED_OFFSET + i,
            &format!("seats_filled_{}", section),
        )?;
        seat_prices[i] = parse_field(
            line,
            record,
            SEAT_PRICE_OFFSET + i,
            &format!("seat_price_{}", section),
        )?;
    }

    FlightRecord::from_section_columns(
        source,
        destination,
        distance,
        aircraft_size,
        max_seats,
        seats_filled,
        seat_prices,
    )
    .map_err(|error| ImportError::InvalidFlight { line, error })
}

/// 解析单条航班文本
pub fn parse_flight_line(text: &str) -> ImportResult<FlightRecord> {
    read_single_record(text, FLIGHT_FIELD_COUNT, record_to_flight)
}

/// 解析航班数据流
///
/// 无效行记入 `rejected`，其余行照常导入
pub fn parse_flight_records<R: Read>(reader: R) -> ImportResult<ImportReport<FlightRecord>> {
    debug!("开始读取航班数据");
    let report = read_pipe_records(reader, record_to_flight)?;
    debug!(
        "航班数据读取完成: 成功 {} 条, 拒绝 {} 条",
        report.accepted_count(),
        report.rejected_count()
    );
    Ok(report)
}

/// 读取航班数据文件
pub fn load_flight_records(path: &Path) -> ImportResult<ImportReport<FlightRecord>> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    let file = File::open(path)?;
    let report = parse_flight_records(BufReader::new(file))?;
    info!(
        "已导入航班数据 {}: {} 条",
        path.display(),
        report.accepted_count()
    );
    Ok(report)
}
