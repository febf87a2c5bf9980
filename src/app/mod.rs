// ==========================================
// 绩效评分报表引擎 - 应用层
// ==========================================
// 职责: 组装共享状态与 API 实例,供传输层/命令行使用
// ==========================================

pub mod state;

// 重导出
pub use state::{get_default_export_dir, AppState};
