// ==========================================
// 绩效评分报表引擎 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、结果对象
// 红线: 不含存储逻辑,不含引擎逻辑
// ==========================================

pub mod report;
pub mod score_record;
pub mod types;

// 重导出核心类型
pub use report::{AggregationReport, EntityAggregate, ExportArtifact, ExportBundle, IngestReport};
pub use score_record::{MetricInput, MetricValues, NewScoreRecord, ScoreRecord};
pub use types::{ExportFormat, Metric};
