// ==========================================
// 绩效评分报表引擎 - 命令行入口
// ==========================================
// 用法: score-report <input.csv|input.xlsx> [output_dir]
// 流程: 导入 → 聚合汇总 → 导出 CSV/PDF/Excel
// ==========================================
// 环境变量:
// - SCORE_REPORT_WEIGHTS: 初始权重 JSON，例如 {"productivity":0.6}
// - SCORE_REPORT_EXPORT_PROFILE: 导出配置 JSON
// - SCORE_REPORT_EXPORT_DIR: 默认导出目录
// ==========================================

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use score_report::app::{get_default_export_dir, AppState};
use score_report::{logging, ExportProfile, WeightConfig};

fn load_export_profile() -> Result<ExportProfile> {
    match std::env::var("SCORE_REPORT_EXPORT_PROFILE") {
        Ok(raw) if !raw.trim().is_empty() => {
            ExportProfile::from_json(&raw).context("SCORE_REPORT_EXPORT_PROFILE 格式错误")
        }
        _ => Ok(ExportProfile::default()),
    }
}

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .context("用法: score-report <input.csv|input.xlsx> [output_dir]")?;
    let output_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(get_default_export_dir);

    tracing::info!("==================================================");
    tracing::info!("{} v{}", score_report::APP_NAME, score_report::VERSION);
    tracing::info!("==================================================");

    let state = AppState::with_config(WeightConfig::default(), load_export_profile()?);
    let api = state.score_api.clone();

    if let Ok(raw) = std::env::var("SCORE_REPORT_WEIGHTS") {
        let weights = api
            .restore_weights(&raw)
            .context("SCORE_REPORT_WEIGHTS 格式错误")?;
        tracing::info!(?weights, "已应用初始权重");
    }

    // 导入
    let report = api
        .ingest_file(&input)
        .with_context(|| format!("导入失败: {}", input))?;
    tracing::info!(count = report.count, batch_id = %report.batch_id, "导入完成");

    // 聚合汇总
    let summary = api.aggregate(&[])?;
    for group in &summary.groups {
        tracing::info!(
            entity_id = %group.entity_id,
            records = group.record_count,
            productivity = group.averages.productivity,
            quality = group.averages.quality,
            timeliness = group.averages.timeliness,
            "实体均值"
        );
    }

    // 导出
    let bundle = api.export_all()?;
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("无法创建导出目录: {}", output_dir.display()))?;

    for artifact in [&bundle.csv, &bundle.pdf, &bundle.xlsx] {
        let path = output_dir.join(&artifact.file_name);
        fs::write(&path, &artifact.bytes)
            .with_context(|| format!("写入失败: {}", path.display()))?;
        tracing::info!(
            format = %artifact.format,
            path = %path.display(),
            bytes = artifact.bytes.len(),
            "已导出"
        );
    }

    tracing::info!(records = bundle.record_count, "处理完成");
    Ok(())
}
