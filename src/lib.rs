// ==========================================
// 绩效评分报表引擎 - 核心库
// ==========================================
// 系统定位: 指标记录 → 加权评分 → 聚合 → 多格式导出
// 范围: 核心引擎（传输层/前端不在本库内）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 权重与导出配置
pub mod config;

// 引擎层 - 评分与聚合
pub mod engine;

// 数据仓储层 - 记录存储
pub mod repository;

// 导入层 - 外部表格数据
pub mod importer;

// 导出层 - CSV / PDF / Excel
pub mod export;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 状态组装
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    AggregationReport, EntityAggregate, ExportArtifact, ExportBundle, ExportFormat,
    IngestReport, Metric, MetricInput, MetricValues, ScoreRecord,
};

// 配置
pub use config::{ExportProfile, PartialWeights, WeightConfig, WeightConfigManager};

// 引擎
pub use engine::{AggregationEngine, ScoreCalculator};

// API
pub use api::{AddRecordRequest, ApiError, ApiResult, ScoreApi};

// 应用
pub use app::AppState;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "绩效评分报表引擎";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
