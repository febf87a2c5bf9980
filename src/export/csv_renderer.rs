// ==========================================
// 绩效评分报表引擎 - CSV 导出
// ==========================================
// 格式: 表头 + 每条记录一行,逗号分隔,\n 换行
// 空仓储: 仅输出表头行
// 转义: 含逗号/引号/换行的值按 RFC 4180 加引号
// ==========================================

use crate::domain::score_record::ScoreRecord;
use crate::export::error::{ExportError, ExportResult};
use crate::export::{format_number, EXPORT_COLUMNS};
use csv::{Terminator, WriterBuilder};

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRenderer;

impl CsvRenderer {
    pub fn render(&self, records: &[ScoreRecord]) -> ExportResult<Vec<u8>> {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(EXPORT_COLUMNS)?;
        for record in records {
            writer.write_record([
                record.entity_id.clone(),
                format_number(record.productivity),
                format_number(record.quality),
                format_number(record.timeliness),
                format_number(record.score),
                record.date_iso(),
            ])?;
        }

        writer
            .into_inner()
            .map_err(|e| ExportError::CsvRenderError(e.to_string()))
    }
}
