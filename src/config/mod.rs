// ==========================================
// 绩效评分报表引擎 - 配置层
// ==========================================
// 职责: 权重配置管理、导出配置
// 存储: 进程内,无持久化
// ==========================================

pub mod error;
pub mod export_profile;
pub mod weight_config;

// 重导出核心配置类型
pub use error::{ConfigError, ConfigResult};
pub use export_profile::ExportProfile;
pub use weight_config::{
    default_weights, PartialWeights, WeightConfig, WeightConfigManager, WeightUpdateOutcome,
};
