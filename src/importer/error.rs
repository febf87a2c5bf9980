// ==========================================
// 绩效评分报表引擎 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分类: 结构解析错误（ParseError） / 读取错误（IOError）
// ==========================================

use crate::config::error::ConfigError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件读取错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    // ===== 结构解析错误 =====
    #[error("导入内容为空: 缺少表头行")]
    EmptyInput,

    #[error("表头缺少必需列: {0}")]
    MissingColumn(String),

    #[error("文件格式不支持: {0}（仅支持 .csv/.xlsx/.xls）")]
    UnsupportedFormat(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("实体ID缺失 (行 {0}): entityId 为空")]
    MissingEntityId(usize),

    // ===== 状态访问错误 =====
    #[error("状态访问失败: {0}")]
    StateError(String),
}

impl ImportError {
    /// 是否为读取类错误（数据源不可用）
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ImportError::FileNotFound(_) | ImportError::FileReadError(_)
        )
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
        if err.is_io_error() {
            ImportError::FileReadError(err.to_string())
        } else {
            ImportError::CsvParseError(err.to_string())
        }
    }
}

// 实现 From<calamine::Error>
impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        match err {
            calamine::Error::Io(e) => ImportError::FileReadError(e.to_string()),
            other => ImportError::ExcelParseError(other.to_string()),
        }
    }
}

impl From<RepositoryError> for ImportError {
    fn from(err: RepositoryError) -> Self {
        ImportError::StateError(err.to_string())
    }
}

impl From<ConfigError> for ImportError {
    fn from(err: ConfigError) -> Self {
        ImportError::StateError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
