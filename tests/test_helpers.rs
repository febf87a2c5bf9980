// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供测试所需的状态初始化、测试数据生成等功能
// ==========================================

#![allow(dead_code)]

use score_report::api::AddRecordRequest;
use score_report::app::AppState;
use score_report::config::PartialWeights;
use score_report::domain::{MetricInput, ScoreRecord};
use std::error::Error;
use std::io::Write;
use tempfile::NamedTempFile;

/// 标准三行样例（E1 两条、E2 一条）
pub const SAMPLE_CSV: &str = "entityId,productivity,quality,timeliness\n\
E1,80,90,70\n\
E2,60,70,80\n\
E1,100,100,100\n";

/// 创建默认权重的应用状态
pub fn create_test_state() -> AppState {
    AppState::new()
}

/// 写入临时文件（指定扩展名）
///
/// # 返回
/// - NamedTempFile: 临时文件（需要保持存活）
pub fn write_temp_file(suffix: &str, bytes: &[u8]) -> Result<NamedTempFile, Box<dyn Error>> {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile()?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(file)
}

/// 构造部分权重更新
pub fn partial_weights(entries: &[(&str, f64)]) -> PartialWeights {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), MetricInput::Number(*v)))
        .collect()
}

/// 批量新增记录
pub fn add_records(
    state: &AppState,
    rows: &[(&str, f64, f64, f64)],
) -> Result<Vec<ScoreRecord>, Box<dyn Error>> {
    let mut stored = Vec::with_capacity(rows.len());
    for (id, p, q, t) in rows {
        stored.push(
            state
                .score_api
                .add_record(AddRecordRequest::new(*id, *p, *q, *t))?,
        );
    }
    Ok(stored)
}
