// ==========================================
// 航线网络利润模拟 - 竖线分隔记录读取
// ==========================================
// 格式: 字段以 '|' 分隔，无表头，无注释与引号语法
// 规则: 行内全部空白字符去除，空字段忽略（"A B" 即 "AB"，行尾多余 '|' 无影响）
// 规则: 空行跳过；单行错误记入报告并继续，I/O 错误直接返回
// ==========================================

use super::error::{ImportError, ImportResult};
use csv::{ReaderBuilder, StringRecord};
use std::fmt::Display;
use std::io::Read;
use std::str::FromStr;
use tracing::warn;

/// 字段分隔符
pub const DELIMITER: u8 = b'|';

// ==========================================
// ImportReport - 导入结果
// ==========================================
#[derive(Debug)]
pub struct ImportReport<T> {
    /// 解析成功的记录（文件顺序）
    pub records: Vec<T>,
    /// 被拒绝的行
    pub rejected: Vec<ImportError>,
}

impl<T> ImportReport<T> {
    pub fn accepted_count(&self) -> usize {
        self.records.len()
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// 是否没有任何被拒绝的行
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl<T> Default for ImportReport<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

fn pipe_reader<R: Read>(reader: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(false)
        .flexible(true) // 字段数由调用方校验
        .quoting(false)
        .from_reader(reader)
}

/// 去除字段内全部空白并丢弃空字段
fn normalize(record: &StringRecord) -> StringRecord {
    record
        .iter()
        .map(|field| field.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|field| !field.is_empty())
        .collect()
}

/// 逐行读取并交给 parse 转换
///
/// parse 参数: (1 起始行号, 记录)
pub(crate) fn read_pipe_records<R, T, F>(reader: R, mut parse: F) -> ImportResult<ImportReport<T>>
where
    R: Read,
    F: FnMut(u64, &StringRecord) -> ImportResult<T>,
{
    let mut rdr = pipe_reader(reader);
    let mut report = ImportReport::default();

    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                warn!("跳过无法解析的行: {}", e);
                report.rejected.push(e.into());
                continue;
            }
        };

        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let record = normalize(&record);
        // 仅含空白或分隔符的行
        if record.is_empty() {
            continue;
        }

        match parse(line, &record) {
            Ok(value) => report.records.push(value),
            Err(e) => {
                warn!("跳过无效记录: {}", e);
                report.rejected.push(e);
            }
        }
    }

    Ok(report)
}

/// 读取单行文本中的唯一记录
pub(crate) fn read_single_record<T, F>(text: &str, expected: usize, parse: F) -> ImportResult<T>
where
    F: FnOnce(u64, &StringRecord) -> ImportResult<T>,
{
    let mut rdr = pipe_reader(text.as_bytes());
    match rdr.records().next() {
        Some(Ok(record)) => {
            let record = normalize(&record);
            if record.is_empty() {
                return Err(ImportError::FieldCountError {
                    line: 1,
                    expected,
                    actual: 0,
                });
            }
            parse(1, &record)
        }
        Some(Err(e)) => Err(e.into()),
        None => Err(ImportError::FieldCountError {
            line: 1,
            expected,
            actual: 0,
        }),
    }
}

/// 校验字段数量
pub(crate) fn expect_field_count(
    line: u64,
    record: &StringRecord,
    expected: usize,
) -> ImportResult<()> {
    if record.len() != expected {
        return Err(ImportError::FieldCountError {
            line,
            expected,
            actual: record.len(),
        });
    }
    Ok(())
}

/// 取非空文本字段
pub(crate) fn text_field(line: u64, record: &StringRecord, idx: usize, name: &str) -> ImportResult<String> {
    match record.get(idx) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(ImportError::EmptyField {
            line,
            field: name.to_string(),
        }),
    }
}

/// 取字段并解析为 T
pub(crate) fn parse_field<T>(line: u64, record: &StringRecord, idx: usize, name: &str) -> ImportResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = text_field(line, record, idx, name)?;
    raw.parse::<T>().map_err(|e| ImportError::TypeConversionError {
        line,
        field: name.to_string(),
        value: raw.clone(),
        message: e.to_string(),
    })
}
