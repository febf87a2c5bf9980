// ==========================================
// 绩效评分报表引擎 - PDF 导出
// ==========================================
// 版式: A4,标题 + 每条记录一行文本,页满自动换页
// ==========================================

use crate::domain::score_record::ScoreRecord;
use crate::export::error::{ExportError, ExportResult};
use crate::export::format_number;
use printpdf::{BuiltinFont, Line, Mm, PdfDocument, PdfLayerReference, Point};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const TITLE_FONT_SIZE: f32 = 18.0;
const BODY_FONT_SIZE: f32 = 12.0;
const TITLE_SPACING_MM: f32 = 14.0;
const LINE_HEIGHT_MM: f32 = 7.0;
const TITLE_RULE_GAP_MM: f32 = 2.0;
const LAYER_NAME: &str = "Layer 1";

fn pdf_error<E: std::fmt::Debug>(err: E) -> ExportError {
    ExportError::PdfRenderError(format!("{:?}", err))
}

/// 标题下划线（左右页边距之间的横线）
fn draw_title_rule(layer: &PdfLayerReference, y: f32) {
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN_MM), Mm(y)), false),
            (Point::new(Mm(PAGE_WIDTH_MM - MARGIN_MM), Mm(y)), false),
        ],
        is_closed: false,
    });
}

/// 单条记录的文本行
pub fn record_line(record: &ScoreRecord) -> String {
    format!(
        "Entity: {}, Score: {}, Date: {}",
        record.entity_id,
        format_number(record.score),
        record.date_iso()
    )
}

#[derive(Debug, Clone)]
pub struct PdfRenderer {
    title: String,
}

impl PdfRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn render(&self, records: &[ScoreRecord]) -> ExportResult<Vec<u8>> {
        let (doc, page, layer) = PdfDocument::new(
            self.title.as_str(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            LAYER_NAME,
        );
        let title_font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;
        let body_font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;

        let mut current_layer = doc.get_page(page).get_layer(layer);
        let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

        current_layer.use_text(
            self.title.as_str(),
            TITLE_FONT_SIZE,
            Mm(MARGIN_MM),
            Mm(y),
            &title_font,
        );
        draw_title_rule(&current_layer, y - TITLE_RULE_GAP_MM);
        y -= TITLE_SPACING_MM;

        for record in records {
            // 页满换页
            if y < MARGIN_MM {
                let (next_page, next_layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
                current_layer = doc.get_page(next_page).get_layer(next_layer);
                y = PAGE_HEIGHT_MM - MARGIN_MM;
            }

            current_layer.use_text(
                record_line(record),
                BODY_FONT_SIZE,
                Mm(MARGIN_MM),
                Mm(y),
                &body_font,
            );
            y -= LINE_HEIGHT_MM;
        }

        doc.save_to_bytes().map_err(pdf_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: &str) -> ScoreRecord {
        ScoreRecord {
            entity_id: id.to_string(),
            productivity: 80.0,
            quality: 90.0,
            timeliness: 70.0,
            score: 81.0,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn test_record_line_format() {
        assert_eq!(
            record_line(&record("E1")),
            "Entity: E1, Score: 81, Date: 2024-01-02T03:04:05.000Z"
        );
    }

    #[test]
    fn test_render_produces_pdf() {
        let bytes = PdfRenderer::new("Score Report").render(&[record("E1")]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_empty_store_keeps_underlined_title() {
        let bytes = PdfRenderer::new("Score Report").render(&[]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_many_records_spans_pages() {
        let records: Vec<ScoreRecord> = (0..120).map(|i| record(&format!("E{}", i))).collect();
        let single = PdfRenderer::new("Score Report").render(&records[..1]).unwrap();
        let many = PdfRenderer::new("Score Report").render(&records).unwrap();
        assert!(many.starts_with(b"%PDF"));
        assert!(many.len() > single.len());
    }
}
