// ==========================================
// 绩效评分报表引擎 - 评分 API
// ==========================================
// 职责: 对外契约（新增/导入/查询/权重/聚合/导出）
// 并发: 写操作（新增、导入、权重更新）经写闸门串行化
//       读操作取调用时刻快照
// ==========================================

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, instrument};

use crate::api::dto::AddRecordRequest;
use crate::api::error::{ApiError, ApiResult};
use crate::config::export_profile::ExportProfile;
use crate::config::weight_config::{
    PartialWeights, WeightConfig, WeightConfigManager, WeightUpdateOutcome,
};
use crate::domain::report::{AggregationReport, ExportArtifact, ExportBundle, IngestReport};
use crate::domain::score_record::{NewScoreRecord, ScoreRecord};
use crate::domain::types::ExportFormat;
use crate::engine::{AggregationEngine, ScoreCalculator};
use crate::export::ExportEngine;
use crate::importer::ScoreImporter;
use crate::repository::ScoreRecordRepository;

// ==========================================
// ScoreApi - 评分 API
// ==========================================

/// 评分API
///
/// 职责：
/// 1. 手工新增记录（边界校验 + 评分）
/// 2. 批量导入（CSV 文本 / 文件）
/// 3. 记录查询、实体列表、分组聚合
/// 4. 权重查询与部分更新
/// 5. CSV / PDF / Excel 导出
pub struct ScoreApi {
    record_repo: Arc<ScoreRecordRepository>,
    weight_config: Arc<WeightConfigManager>,
    importer: ScoreImporter,
    calculator: ScoreCalculator,
    aggregation: AggregationEngine,
    export_engine: ExportEngine,
    write_gate: Mutex<()>,
}

impl ScoreApi {
    /// 创建新的ScoreApi实例
    pub fn new(
        record_repo: Arc<ScoreRecordRepository>,
        weight_config: Arc<WeightConfigManager>,
        export_profile: ExportProfile,
    ) -> Self {
        let importer = ScoreImporter::new(record_repo.clone(), weight_config.clone());
        Self {
            record_repo,
            weight_config,
            importer,
            calculator: ScoreCalculator::new(),
            aggregation: AggregationEngine::new(),
            export_engine: ExportEngine::new(export_profile),
            write_gate: Mutex::new(()),
        }
    }

    fn write_guard(&self) -> ApiResult<MutexGuard<'_, ()>> {
        self.write_gate
            .lock()
            .map_err(|e| ApiError::LockError(format!("写闸门获取失败: {}", e)))
    }

    // ==========================================
    // 记录写入
    // ==========================================

    /// 手工新增记录
    ///
    /// # 返回
    /// - Ok(ScoreRecord): 已入库记录（含时间戳与冻结的评分）
    /// - Err(ApiError::ValidationError): entityId 为空或指标缺失
    #[instrument(skip(self, request))]
    pub fn add_record(&self, request: AddRecordRequest) -> ApiResult<ScoreRecord> {
        let input = request.validate()?;

        let _guard = self.write_guard()?;
        let weights = self.weight_config.get()?;
        let score = self.calculator.calculate(&input.metrics, &weights);

        let stored = self.record_repo.append(NewScoreRecord {
            entity_id: input.entity_id,
            metrics: input.metrics,
            score,
        })?;

        info!(entity_id = %stored.entity_id, score = stored.score, "新增评分记录");
        Ok(stored)
    }

    /// 从 CSV 文本批量导入
    pub fn ingest_text(&self, raw_text: &str) -> ApiResult<IngestReport> {
        let _guard = self.write_guard()?;
        Ok(self.importer.ingest_text(raw_text)?)
    }

    /// 从文件批量导入（.csv / .xlsx / .xls）
    pub fn ingest_file<P: AsRef<Path>>(&self, file_path: P) -> ApiResult<IngestReport> {
        let _guard = self.write_guard()?;
        Ok(self.importer.ingest_file(file_path)?)
    }

    // ==========================================
    // 记录查询
    // ==========================================

    /// 查询记录（可按实体精确过滤；空字符串视为不过滤）
    pub fn list_records(&self, entity_id: Option<&str>) -> ApiResult<Vec<ScoreRecord>> {
        let records = match entity_id.filter(|id| !id.is_empty()) {
            Some(id) => self.record_repo.filter_by_entity(id)?,
            None => self.record_repo.all()?,
        };
        Ok(records)
    }

    /// 去重后的实体列表（按首次出现顺序）
    pub fn list_entities(&self) -> ApiResult<Vec<String>> {
        Ok(self.record_repo.entity_ids()?)
    }

    /// 分组聚合（entity_filter 为空表示全部实体）
    pub fn aggregate(&self, entity_filter: &[String]) -> ApiResult<AggregationReport> {
        let records = self.record_repo.all()?;
        Ok(self.aggregation.build_report(&records, Some(entity_filter)))
    }

    // ==========================================
    // 权重配置
    // ==========================================

    pub fn get_weights(&self) -> ApiResult<WeightConfig> {
        Ok(self.weight_config.get()?)
    }

    /// 部分更新权重，返回更新后的完整权重
    pub fn set_weights(&self, partial: &PartialWeights) -> ApiResult<WeightConfig> {
        Ok(self.set_weights_detailed(partial)?.weights)
    }

    /// 部分更新权重，返回含跳过字段的明细
    pub fn set_weights_detailed(&self, partial: &PartialWeights) -> ApiResult<WeightUpdateOutcome> {
        let _guard = self.write_guard()?;
        Ok(self.weight_config.update(partial)?)
    }

    /// 权重快照（JSON）
    pub fn weights_snapshot(&self) -> ApiResult<String> {
        Ok(self.weight_config.snapshot_json()?)
    }

    /// 从快照恢复权重
    pub fn restore_weights(&self, snapshot_json: &str) -> ApiResult<WeightConfig> {
        let _guard = self.write_guard()?;
        Ok(self.weight_config.restore_from_snapshot(snapshot_json)?)
    }

    // ==========================================
    // 导出
    // ==========================================

    fn export(&self, format: ExportFormat) -> ApiResult<ExportArtifact> {
        let snapshot = self.record_repo.all()?;
        Ok(self.export_engine.render(format, &snapshot)?)
    }

    /// CSV 导出（text/csv）
    pub fn export_delimited(&self) -> ApiResult<ExportArtifact> {
        self.export(ExportFormat::Csv)
    }

    /// PDF 导出（application/pdf）
    pub fn export_document(&self) -> ApiResult<ExportArtifact> {
        self.export(ExportFormat::Pdf)
    }

    /// Excel 导出（xlsx）
    pub fn export_workbook(&self) -> ApiResult<ExportArtifact> {
        self.export(ExportFormat::Xlsx)
    }

    /// 基于同一快照的三种导出
    pub fn export_all(&self) -> ApiResult<ExportBundle> {
        let snapshot = self.record_repo.all()?;
        Ok(self.export_engine.render_all(&snapshot)?)
    }
}
