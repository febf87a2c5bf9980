// ==========================================
// 绩效评分报表引擎 - 导出模块错误类型
// ==========================================
// 红线: 渲染失败只影响本次导出,不影响记录仓储
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV 生成失败: {0}")]
    CsvRenderError(String),

    #[error("PDF 生成失败: {0}")]
    PdfRenderError(String),

    #[error("Excel 生成失败: {0}")]
    WorkbookRenderError(String),
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvRenderError(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::WorkbookRenderError(err.to_string())
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
