// ==========================================
// 航线网络利润模拟 - 航线图描述解析
// ==========================================
// 字段顺序: source | destination | distance
// 注: 距离只做整数解析，正负由网络图建边时判定
// ==========================================

use super::error::{ImportError, ImportResult};
use super::pipe_reader::{
    expect_field_count, parse_field, read_pipe_records, read_single_record, text_field,
    ImportReport,
};
use crate::domain::route::RouteDescription;
use csv::StringRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// 航线描述字段数
pub const ROUTE_FIELD_COUNT: usize = 3;

fn record_to_route(line: u64, record: &StringRecord) -> ImportResult<RouteDescription> {
    expect_field_count(line, record, ROUTE_FIELD_COUNT)?;
    Ok(RouteDescription {
        source: text_field(line, record, 0, "source")?,
        destination: text_field(line, record, 1, "destination")?,
        distance: parse_field(line, record, 2, "distance")?,
    })
}

pub fn parse_route_line(text: &str) -> ImportResult<RouteDescription> {
    read_single_record(text, ROUTE_FIELD_COUNT, record_to_route)
}

pub fn parse_route_descriptions<R: Read>(reader: R) -> ImportResult<ImportReport<RouteDescription>> {
    read_pipe_records(reader, record_to_route)
}

/// 读取航线图文件
pub fn load_route_descriptions(path: &Path) -> ImportResult<ImportReport<RouteDescription>> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    let file = File::open(path)?;
    let report = parse_route_descriptions(BufReader::new(file))?;
    info!(
        "已导入航线图 {}: {} 条",
        path.display(),
        report.accepted_count()
    );
    Ok(report)
}
