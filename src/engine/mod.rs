// ==========================================
// 绩效评分报表引擎 - 引擎层
// ==========================================
// 职责: 评分计算、分组聚合
// 红线: 引擎只做计算,不持有状态
// ==========================================

pub mod aggregation;
pub mod score_calculator;

// 重导出核心引擎
pub use aggregation::AggregationEngine;
pub use score_calculator::{coerce_metric, round2, ScoreCalculator};
