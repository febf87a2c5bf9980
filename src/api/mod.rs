// ==========================================
// 绩效评分报表引擎 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供传输层（HTTP/CLI）调用
// ==========================================

pub mod dto;
pub mod error;
pub mod score_api;

// 重导出核心类型
pub use dto::{AddRecordRequest, ValidatedRecordInput};
pub use error::{ApiError, ApiResult};
pub use score_api::ScoreApi;
