// ==========================================
// 绩效评分报表引擎 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换各层错误为调用方可识别的分类
// 分类: ValidationError / ParseError / IOError / RenderError
// ==========================================

use crate::config::error::ConfigError;
use crate::export::error::ExportError;
use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("数据验证失败: {0}")]
    ValidationError(String),

    #[error("导入解析失败: {0}")]
    ParseError(String),

    // ==========================================
    // 数据源/渲染错误
    // ==========================================
    #[error("数据源读取失败: {0}")]
    IoError(String),

    #[error("报表生成失败: {0}")]
    RenderError(String),

    // ==========================================
    // 状态访问错误
    // ==========================================
    #[error("状态锁获取失败: {0}")]
    LockError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 错误分类代码（供传输层映射状态码）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::ParseError(_) => "PARSE_ERROR",
            ApiError::IoError(_) => "IO_ERROR",
            ApiError::RenderError(_) => "RENDER_ERROR",
            ApiError::LockError(_) => "LOCK_ERROR",
            ApiError::InternalError(_) | ApiError::Other(_) => "INTERNAL_ERROR",
        }
    }
}

// ==========================================
// 从各层错误转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        if err.is_io() {
            return ApiError::IoError(err.to_string());
        }
        match err {
            ImportError::StateError(msg) => ApiError::LockError(msg),
            other => ApiError::ParseError(other.to_string()),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::LockError(msg) => ApiError::LockError(msg),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::LockError(msg) => ApiError::LockError(msg),
            ConfigError::SnapshotFormat(msg) => ApiError::ValidationError(msg),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        ApiError::RenderError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_error_classification() {
        let io: ApiError = ImportError::FileNotFound("a.csv".to_string()).into();
        assert_eq!(io.code(), "IO_ERROR");

        let parse: ApiError = ImportError::EmptyInput.into();
        assert_eq!(parse.code(), "PARSE_ERROR");

        let parse: ApiError = ImportError::MissingEntityId(4).into();
        assert!(parse.to_string().contains("行 4"));
    }

    #[test]
    fn test_export_error_is_render_error() {
        let err: ApiError = ExportError::PdfRenderError("boom".to_string()).into();
        assert_eq!(err.code(), "RENDER_ERROR");
    }
}
