// ==========================================
// 绩效评分报表引擎 - 字段映射器实现
// ==========================================
// 职责: 源列 → 标准字段映射 + 数值转换
// 规则: 按列名定位（任意顺序）；未识别的列忽略
//       数值缺失/无法解析 → 0；entityId 缺失 → 空串（随后判为错误）
// ==========================================

use crate::domain::score_record::MetricValues;
use crate::domain::types::Metric;
use crate::engine::score_calculator::coerce_metric;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::score_importer_trait::RawRow;
use tracing::warn;

/// entityId 列名别名
pub const ENTITY_ID_COLUMNS: [&str; 3] = ["entityId", "entity_id", "entity"];

/// 映射后的行
#[derive(Debug, Clone, PartialEq)]
pub struct RawScoreRow {
    pub row_number: usize,
    pub entity_id: String,
    pub metrics: MetricValues,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FieldMapper;

impl FieldMapper {
    /// 校验表头：必须能定位到 entityId 列；缺失的指标列仅告警
    pub fn validate_headers(&self, headers: &[String]) -> ImportResult<()> {
        let has_entity = headers
            .iter()
            .any(|h| ENTITY_ID_COLUMNS.iter().any(|c| *c == h.as_str()));
        if !has_entity {
            return Err(ImportError::MissingColumn("entityId".to_string()));
        }

        for metric in Metric::ALL {
            if !headers.iter().any(|h| h == metric.key()) {
                warn!(column = metric.key(), "表头缺少指标列，该列按 0 处理");
            }
        }
        Ok(())
    }

    /// 将原始行映射为评分行
    pub fn map_to_score_row(&self, row: &RawRow) -> ImportResult<RawScoreRow> {
        let entity_id = self
            .get_string(row, &ENTITY_ID_COLUMNS)
            .unwrap_or_default()
            .to_string();
        if entity_id.is_empty() {
            return Err(ImportError::MissingEntityId(row.row_number));
        }

        let metric = |m: Metric| coerce_metric(self.get_string(row, &[m.key()]));

        Ok(RawScoreRow {
            row_number: row.row_number,
            entity_id,
            metrics: MetricValues::new(
                metric(Metric::Productivity),
                metric(Metric::Quality),
                metric(Metric::Timeliness),
            ),
        })
    }

    /// 提取字符串字段，按别名顺序取第一个非空值
    fn get_string<'a>(&self, row: &'a RawRow, aliases: &[&str]) -> Option<&'a str> {
        aliases
            .iter()
            .filter_map(|alias| row.cells.get(*alias))
            .map(|v| v.trim())
            .find(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn row(cells: &[(&str, &str)]) -> RawRow {
        RawRow {
            row_number: 2,
            cells: cells
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        }
    }

    #[test]
    fn test_map_full_row() {
        let mapped = FieldMapper
            .map_to_score_row(&row(&[
                ("entityId", "E1"),
                ("productivity", "80"),
                ("quality", "90"),
                ("timeliness", "70"),
                ("comment", "ignored"),
            ]))
            .unwrap();

        assert_eq!(mapped.entity_id, "E1");
        assert_eq!(mapped.metrics, MetricValues::new(80.0, 90.0, 70.0));
    }

    #[test]
    fn test_missing_and_invalid_metrics_default_to_zero() {
        let mapped = FieldMapper
            .map_to_score_row(&row(&[("entityId", "E1"), ("productivity", ""), ("quality", "x")]))
            .unwrap();
        assert_eq!(mapped.metrics, MetricValues::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_entity_alias() {
        let mapped = FieldMapper
            .map_to_score_row(&row(&[("entity_id", "E9")]))
            .unwrap();
        assert_eq!(mapped.entity_id, "E9");
    }

    #[test]
    fn test_empty_entity_id_is_error() {
        let result = FieldMapper.map_to_score_row(&row(&[("entityId", " "), ("quality", "1")]));
        assert!(matches!(result, Err(ImportError::MissingEntityId(2))));
    }

    #[test]
    fn test_validate_headers_requires_entity_column() {
        let headers = vec!["productivity".to_string(), "quality".to_string()];
        assert!(matches!(
            FieldMapper.validate_headers(&headers),
            Err(ImportError::MissingColumn(_))
        ));

        let headers = vec!["entityId".to_string()];
        assert!(FieldMapper.validate_headers(&headers).is_ok());
    }
}
