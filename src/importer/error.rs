// ==========================================
// 航线网络利润模拟 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::flight::FlightValidationError;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("记录解析失败: {0}")]
    CsvParseError(String),

    // ===== 数据映射错误 =====
    #[error("字段数量错误 (行 {line}): 期望 {expected} 个，实际 {actual} 个")]
    FieldCountError {
        line: u64,
        expected: usize,
        actual: usize,
    },

    #[error("字段为空 (行 {line}, 字段 {field})")]
    EmptyField { line: u64, field: String },

    #[error("类型转换失败 (行 {line}, 字段 {field}, 值 {value:?}): {message}")]
    TypeConversionError {
        line: u64,
        field: String,
        value: String,
        message: String,
    },

    // ===== 数据质量错误 =====
    #[error("航班数据无效 (行 {line}): {error}")]
    InvalidFlight {
        line: u64,
        #[source]
        error: FlightValidationError,
    },
}

impl ImportError {
    /// 行级错误的行号（文件级错误返回 None）
    pub fn line(&self) -> Option<u64> {
        match self {
            ImportError::FieldCountError { line, .. }
            | ImportError::EmptyField { line, .. }
            | ImportError::TypeConversionError { line, .. }
            | ImportError::InvalidFlight { line, .. } => Some(*line),
            _ => None,
        }
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
