// ==========================================
// 绩效评分报表引擎 - 报表/结果对象
// ==========================================
// 职责: 导入结果、分组聚合结果、导出产物
// ==========================================

use crate::domain::score_record::MetricValues;
use crate::domain::types::ExportFormat;
use serde::{Deserialize, Serialize};

/// 批量导入结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestReport {
    /// 新增记录数
    pub count: usize,
    /// 跳过的空白行数
    pub skipped_blank_rows: usize,
    /// 导入批次ID（日志追溯）
    pub batch_id: String,
    /// 导入耗时（毫秒）
    pub elapsed_ms: i64,
}

/// 单个实体的分组均值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityAggregate {
    pub entity_id: String,
    pub record_count: usize,
    /// 三项指标均值
    pub averages: MetricValues,
    /// score 均值
    pub average_score: f64,
}

/// 聚合报表（分组 + 合计）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregationReport {
    pub groups: Vec<EntityAggregate>,
    pub totals: MetricValues,
}

/// 导出产物
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub media_type: &'static str,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// 同一快照生成的三种导出
#[derive(Debug, Clone, PartialEq)]
pub struct ExportBundle {
    /// 快照内记录数
    pub record_count: usize,
    pub csv: ExportArtifact,
    pub pdf: ExportArtifact,
    pub xlsx: ExportArtifact,
}
