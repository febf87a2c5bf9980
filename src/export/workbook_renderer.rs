// ==========================================
// 绩效评分报表引擎 - Excel 导出
// ==========================================
// 版式: 单工作表,表头行 + 每条记录一行
// 类型: 指标/评分为数值单元格,entityId/date 为文本
// ==========================================

use crate::domain::score_record::ScoreRecord;
use crate::export::error::ExportResult;
use crate::export::EXPORT_COLUMNS;
use rust_xlsxwriter::{Format, Workbook};

#[derive(Debug, Clone)]
pub struct WorkbookRenderer {
    sheet_name: String,
}

impl WorkbookRenderer {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }

    pub fn render(&self, records: &[ScoreRecord]) -> ExportResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(self.sheet_name.as_str())?;

        for (col, name) in EXPORT_COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *name, &header_format)?;
        }

        for (idx, record) in records.iter().enumerate() {
            let row = (idx + 1) as u32;
            worksheet.write_string(row, 0, record.entity_id.as_str())?;
            worksheet.write_number(row, 1, record.productivity)?;
            worksheet.write_number(row, 2, record.quality)?;
            worksheet.write_number(row, 3, record.timeliness)?;
            worksheet.write_number(row, 4, record.score)?;
            worksheet.write_string(row, 5, record.date_iso())?;
        }
        worksheet.autofit();

        Ok(workbook.save_to_buffer()?)
    }
}
