// ==========================================
// 绩效评分报表引擎 - 导出层
// ==========================================
// 职责: 将记录快照渲染为 CSV / PDF / Excel
// 红线: 三种导出基于同一快照,保证相互一致
// ==========================================

pub mod csv_renderer;
pub mod error;
pub mod pdf_renderer;
pub mod workbook_renderer;

pub use csv_renderer::CsvRenderer;
pub use error::{ExportError, ExportResult};
pub use pdf_renderer::PdfRenderer;
pub use workbook_renderer::WorkbookRenderer;

use crate::config::export_profile::ExportProfile;
use crate::domain::report::{ExportArtifact, ExportBundle};
use crate::domain::score_record::ScoreRecord;
use crate::domain::types::ExportFormat;
use tracing::{error, info, instrument};

/// 导出列（CSV 与 Excel 共用）
pub const EXPORT_COLUMNS: [&str; 6] = [
    "entityId",
    "productivity",
    "quality",
    "timeliness",
    "score",
    "date",
];

/// 数值文本格式（最短往返表示: 80 / 81.5）
pub fn format_number(value: f64) -> String {
    value.to_string()
}

// ==========================================
// ExportEngine - 导出引擎
// ==========================================
pub struct ExportEngine {
    profile: ExportProfile,
    csv: CsvRenderer,
    pdf: PdfRenderer,
    workbook: WorkbookRenderer,
}

impl Default for ExportEngine {
    fn default() -> Self {
        Self::new(ExportProfile::default())
    }
}

impl ExportEngine {
    pub fn new(profile: ExportProfile) -> Self {
        let pdf = PdfRenderer::new(profile.document_title.clone());
        let workbook = WorkbookRenderer::new(profile.sheet_name.clone());
        Self {
            profile,
            csv: CsvRenderer,
            pdf,
            workbook,
        }
    }

    /// 按格式渲染单个导出
    #[instrument(skip(self, records), fields(records = records.len()))]
    pub fn render(&self, format: ExportFormat, records: &[ScoreRecord]) -> ExportResult<ExportArtifact> {
        let bytes = match format {
            ExportFormat::Csv => self.csv.render(records),
            ExportFormat::Pdf => self.pdf.render(records),
            ExportFormat::Xlsx => self.workbook.render(records),
        }
        .map_err(|e| {
            error!(format = %format, error = %e, "导出失败");
            e
        })?;

        info!(format = %format, bytes = bytes.len(), "导出完成");
        Ok(ExportArtifact {
            format,
            media_type: format.media_type(),
            file_name: self.profile.file_name(format.extension()),
            bytes,
        })
    }

    /// 基于同一快照渲染三种导出
    pub fn render_all(&self, records: &[ScoreRecord]) -> ExportResult<ExportBundle> {
        Ok(ExportBundle {
            record_count: records.len(),
            csv: self.render(ExportFormat::Csv, records)?,
            pdf: self.render(ExportFormat::Pdf, records)?,
            xlsx: self.render(ExportFormat::Xlsx, records)?,
        })
    }
}
