// ==========================================
// 绩效评分报表引擎 - 应用状态
// ==========================================
// 职责: 持有进程内共享状态（权重、记录仓储）和API实例
// 红线: 不使用全局变量,状态显式注入
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::ScoreApi;
use crate::config::{ExportProfile, WeightConfig, WeightConfigManager};
use crate::repository::ScoreRecordRepository;

/// 应用状态
///
/// 进程生命周期内独占权重配置与记录仓储；重启后恢复默认权重、清空记录
pub struct AppState {
    /// 评分记录仓储
    pub record_repo: Arc<ScoreRecordRepository>,

    /// 权重配置管理器
    pub weight_config: Arc<WeightConfigManager>,

    /// 评分API
    pub score_api: Arc<ScoreApi>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// 以默认权重和默认导出配置创建
    pub fn new() -> Self {
        Self::with_config(WeightConfig::default(), ExportProfile::default())
    }

    /// 以指定初始权重和导出配置创建
    pub fn with_config(initial_weights: WeightConfig, export_profile: ExportProfile) -> Self {
        tracing::info!(
            productivity = initial_weights.productivity,
            quality = initial_weights.quality,
            timeliness = initial_weights.timeliness,
            "初始化AppState"
        );

        let record_repo = Arc::new(ScoreRecordRepository::new());
        let weight_config = Arc::new(WeightConfigManager::new(initial_weights));
        let score_api = Arc::new(ScoreApi::new(
            record_repo.clone(),
            weight_config.clone(),
            export_profile,
        ));

        Self {
            record_repo,
            weight_config,
            score_api,
        }
    }
}

/// 默认导出目录
///
/// 优先级: 环境变量 SCORE_REPORT_EXPORT_DIR → 用户数据目录/score-report/exports → ./exports
pub fn get_default_export_dir() -> PathBuf {
    if let Ok(path) = std::env::var("SCORE_REPORT_EXPORT_DIR") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::data_dir() {
        Some(data_dir) => data_dir.join("score-report").join("exports"),
        None => PathBuf::from("./exports"),
    }
}
