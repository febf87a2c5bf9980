// ==========================================
// 绩效评分报表引擎 - 数据仓储层
// ==========================================
// 红线: Repository 不含业务逻辑
// ==========================================
// 职责: 评分记录的追加与快照读取
// 约束: 读操作一律返回快照,不暴露内部序列
// ==========================================

pub mod error;
pub mod score_record_repo;

// 重导出核心仓储
pub use error::{RepositoryError, RepositoryResult};
pub use score_record_repo::ScoreRecordRepository;
