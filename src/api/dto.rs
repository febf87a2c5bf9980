// ==========================================
// 绩效评分报表引擎 - 请求/响应结构
// ==========================================
// 职责: 强类型请求体,在进入核心操作前完成校验
// ==========================================

use crate::api::error::ApiError;
use crate::domain::score_record::{MetricInput, MetricValues};
use crate::domain::types::Metric;
use serde::{Deserialize, Serialize};

/// 手工新增记录请求
///
/// 字段缺失（或为 null）→ ValidationError；
/// 字段存在但无法解析为数字 → 按 0 处理
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRecordRequest {
    #[serde(default)]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub productivity: Option<MetricInput>,
    #[serde(default)]
    pub quality: Option<MetricInput>,
    #[serde(default)]
    pub timeliness: Option<MetricInput>,
}

/// 校验通过的新增记录输入
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRecordInput {
    pub entity_id: String,
    pub metrics: MetricValues,
}

impl AddRecordRequest {
    pub fn new(
        entity_id: impl Into<String>,
        productivity: impl Into<MetricInput>,
        quality: impl Into<MetricInput>,
        timeliness: impl Into<MetricInput>,
    ) -> Self {
        Self {
            entity_id: Some(entity_id.into()),
            productivity: Some(productivity.into()),
            quality: Some(quality.into()),
            timeliness: Some(timeliness.into()),
        }
    }

    fn metric(&self, metric: Metric) -> Option<&MetricInput> {
        match metric {
            Metric::Productivity => self.productivity.as_ref(),
            Metric::Quality => self.quality.as_ref(),
            Metric::Timeliness => self.timeliness.as_ref(),
        }
    }

    /// 边界校验
    pub fn validate(&self) -> Result<ValidatedRecordInput, ApiError> {
        let entity_id = self
            .entity_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::ValidationError("entityId 不能为空".to_string()))?;

        let missing: Vec<&str> = Metric::ALL
            .iter()
            .filter(|m| self.metric(**m).is_none())
            .map(|m| m.key())
            .collect();
        if !missing.is_empty() {
            return Err(ApiError::ValidationError(format!(
                "缺少必填字段: {}",
                missing.join(", ")
            )));
        }

        let value = |m: Metric| {
            self.metric(m)
                .and_then(MetricInput::as_f64)
                .unwrap_or(0.0)
        };

        Ok(ValidatedRecordInput {
            entity_id: entity_id.to_string(),
            metrics: MetricValues::new(
                value(Metric::Productivity),
                value(Metric::Quality),
                value(Metric::Timeliness),
            ),
        })
    }
}
