// ==========================================
// 绩效评分报表引擎 - 权重配置管理器
// ==========================================
// 职责: 权重读取、部分更新、快照/恢复
// 存储: 进程内（重启恢复默认值）
// ==========================================
// 规则:
// - 权重名称集合固定（productivity/quality/timeliness）
// - 未知名称忽略；无法解析为数字的值保持原值
// - 不校验权重之和
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::score_record::MetricInput;
use crate::domain::types::Metric;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Mutex;
use tracing::{debug, info, warn};

/// 部分权重更新（键 → 输入值）
pub type PartialWeights = BTreeMap<String, MetricInput>;

/// 默认权重
pub mod default_weights {
    pub const PRODUCTIVITY: f64 = 0.5;
    pub const QUALITY: f64 = 0.3;
    pub const TIMELINESS: f64 = 0.2;
}

// ==========================================
// WeightConfig - 权重系数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    pub productivity: f64,
    pub quality: f64,
    pub timeliness: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            productivity: default_weights::PRODUCTIVITY,
            quality: default_weights::QUALITY,
            timeliness: default_weights::TIMELINESS,
        }
    }
}

impl WeightConfig {
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

    fn set(&mut self, metric: Metric, value: f64) {
        match metric {
            Metric::Productivity => self.productivity = value,
            Metric::Quality => self.quality = value,
            Metric::Timeliness => self.timeliness = value,
        }
    }

    /// 名称 → 数值映射（固定三项）
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        Metric::ALL
            .iter()
            .map(|m| (m.key().to_string(), self.get(*m)))
            .collect()
    }

    /// 在副本上应用部分更新，返回更新结果
    pub fn apply_partial(&self, partial: &PartialWeights) -> WeightUpdateOutcome {
        let mut weights = *self;
        let mut applied = Vec::new();
        let mut ignored_keys = Vec::new();
        let mut rejected = Vec::new();

        for (key, input) in partial {
            let metric = match Metric::from_key(key) {
                Some(m) => m,
                None => {
                    ignored_keys.push(key.clone());
                    continue;
                }
            };

            match input.as_f64() {
                Some(value) => {
                    weights.set(metric, value);
                    applied.push(metric);
                }
                None => rejected.push(metric),
            }
        }

        WeightUpdateOutcome {
            weights,
            applied,
            ignored_keys,
            rejected,
        }
    }
}

/// 部分更新结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightUpdateOutcome {
    /// 更新后的完整权重
    pub weights: WeightConfig,
    /// 已更新的指标
    pub applied: Vec<Metric>,
    /// 未知名称（忽略）
    pub ignored_keys: Vec<String>,
    /// 值无法解析（保持原值）
    pub rejected: Vec<Metric>,
}

// ==========================================
// WeightConfigManager - 权重配置管理器
// ==========================================
pub struct WeightConfigManager {
    weights: Mutex<WeightConfig>,
}

impl Default for WeightConfigManager {
    fn default() -> Self {
        Self::new(WeightConfig::default())
    }
}

impl WeightConfigManager {
    /// 创建新的 WeightConfigManager 实例
    pub fn new(initial: WeightConfig) -> Self {
        Self {
            weights: Mutex::new(initial),
        }
    }

    /// 读取当前权重（快照）
    pub fn get(&self) -> ConfigResult<WeightConfig> {
        let guard = self
            .weights
            .lock()
            .map_err(|e| ConfigError::LockError(e.to_string()))?;
        Ok(*guard)
    }

    /// 部分更新权重
    ///
    /// # 返回
    /// - Ok(WeightUpdateOutcome): 更新后的权重及被跳过的字段
    /// - Err: 锁获取失败
    ///
    /// # 说明
    /// 未知名称与无法解析的值不会报错，只记录 warn 日志
    pub fn update(&self, partial: &PartialWeights) -> ConfigResult<WeightUpdateOutcome> {
        let mut guard = self
            .weights
            .lock()
            .map_err(|e| ConfigError::LockError(e.to_string()))?;

        let outcome = guard.apply_partial(partial);
        *guard = outcome.weights;

        for key in &outcome.ignored_keys {
            warn!(key = %key, "未知权重名称，已忽略");
        }
        for metric in &outcome.rejected {
            warn!(metric = %metric, "权重值无法解析为数字，保持原值");
        }
        info!(
            productivity = outcome.weights.productivity,
            quality = outcome.weights.quality,
            timeliness = outcome.weights.timeliness,
            applied = outcome.applied.len(),
            "权重已更新"
        );

        Ok(outcome)
    }

    /// 获取权重快照（JSON格式）
    pub fn snapshot_json(&self) -> ConfigResult<String> {
        let weights = self.get()?;
        Ok(serde_json::to_string(&weights.to_map())?)
    }

    /// 从快照恢复权重（与部分更新规则一致）
    pub fn restore_from_snapshot(&self, snapshot_json: &str) -> ConfigResult<WeightConfig> {
        let partial: PartialWeights = serde_json::from_str(snapshot_json)?;
        debug!(keys = partial.len(), "从快照恢复权重");
        Ok(self.update(&partial)?.weights)
    }
}
