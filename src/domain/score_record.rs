// ==========================================
// 绩效评分报表引擎 - 评分记录实体
// ==========================================
// 红线: 评分记录创建后不可变,score 在创建时冻结
// ==========================================

use crate::domain::types::Metric;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// MetricValues - 三项指标数值
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricValues {
    pub productivity: f64,
    pub quality: f64,
    pub timeliness: f64,
}

impl MetricValues {
    pub fn new(productivity: f64, quality: f64, timeliness: f64) -> Self {
        Self {
            productivity,
            quality,
            timeliness,
        }
    }

    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Productivity => self.productivity,
            Metric::Quality => self.quality,
            Metric::Timeliness => self.timeliness,
        }
    }
}

// ==========================================
// MetricInput - 边界输入值
// ==========================================
// 表单/JSON 中的指标与权重既可能是数字也可能是字符串
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricInput {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl MetricInput {
    /// 解析为有限浮点数，无法解析返回 None
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            MetricInput::Number(n) => Some(*n).filter(|v| v.is_finite()),
            MetricInput::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            MetricInput::Other(_) => None,
        }
    }
}

impl From<f64> for MetricInput {
    fn from(value: f64) -> Self {
        MetricInput::Number(value)
    }
}

impl From<&str> for MetricInput {
    fn from(value: &str) -> Self {
        MetricInput::Text(value.to_string())
    }
}

// ==========================================
// NewScoreRecord - 待入库记录（未分配时间戳）
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct NewScoreRecord {
    pub entity_id: String,
    pub metrics: MetricValues,
    pub score: f64,
}

// ==========================================
// ScoreRecord - 评分记录
// ==========================================
// 序列化字段名与原前端约定一致: entityId / date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRecord {
    pub entity_id: String,
    pub productivity: f64,
    pub quality: f64,
    pub timeliness: f64,
    pub score: f64,
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
}

impl ScoreRecord {
    pub fn from_new(record: NewScoreRecord, timestamp: DateTime<Utc>) -> Self {
        Self {
            entity_id: record.entity_id,
            productivity: record.metrics.productivity,
            quality: record.metrics.quality,
            timeliness: record.metrics.timeliness,
            score: record.score,
            timestamp,
        }
    }

    pub fn metrics(&self) -> MetricValues {
        MetricValues::new(self.productivity, self.quality, self.timeliness)
    }

    /// ISO-8601 时间（毫秒精度，Z 结尾）
    pub fn date_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
