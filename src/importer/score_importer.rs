// ==========================================
// 绩效评分报表引擎 - 评分数据导入器
// ==========================================
// 职责: 整合导入流程，从文本/文件到记录仓储
// 流程: 解析 → 表头校验 → 权重快照 → 映射 + 评分 → 批量落库
// ==========================================
// 原子性: 全部行映射成功后一次性追加；任一失败则仓储不变
// ==========================================

use crate::config::weight_config::WeightConfigManager;
use crate::domain::report::IngestReport;
use crate::domain::score_record::NewScoreRecord;
use crate::engine::score_calculator::ScoreCalculator;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::{CsvParser, UniversalFileParser};
use crate::importer::score_importer_trait::ParsedTable;
use crate::repository::score_record_repo::ScoreRecordRepository;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

// ==========================================
// ScoreImporter - 评分数据导入器
// ==========================================
pub struct ScoreImporter {
    // 数据访问层
    record_repo: Arc<ScoreRecordRepository>,

    // 权重配置
    weight_config: Arc<WeightConfigManager>,

    // 导入组件
    csv_parser: CsvParser,
    file_parser: UniversalFileParser,
    field_mapper: FieldMapper,
    calculator: ScoreCalculator,
}

impl ScoreImporter {
    /// 创建新的 ScoreImporter 实例
    pub fn new(
        record_repo: Arc<ScoreRecordRepository>,
        weight_config: Arc<WeightConfigManager>,
    ) -> Self {
        Self {
            record_repo,
            weight_config,
            csv_parser: CsvParser,
            file_parser: UniversalFileParser,
            field_mapper: FieldMapper,
            calculator: ScoreCalculator::new(),
        }
    }

    /// 从 CSV 文本导入
    #[instrument(skip(self, text), fields(bytes = text.len()))]
    pub fn ingest_text(&self, text: &str) -> ImportResult<IngestReport> {
        let start_time = Instant::now();

        debug!("步骤 1: 解析文本");
        let table = self.csv_parser.parse_str(text).map_err(|e| {
            error!(error = %e, "文本解析失败");
            e
        })?;

        self.import_table(table, start_time)
    }

    /// 从文件导入（.csv / .xlsx / .xls）
    #[instrument(skip(self, file_path))]
    pub fn ingest_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<IngestReport> {
        let start_time = Instant::now();
        let path = file_path.as_ref();
        info!(file_path = %path.display(), "开始导入评分文件");

        debug!("步骤 1: 解析文件");
        let table = self.file_parser.parse(path).map_err(|e| {
            error!(error = %e, "文件解析失败");
            e
        })?;

        self.import_table(table, start_time)
    }

    fn import_table(&self, table: ParsedTable, start_time: Instant) -> ImportResult<IngestReport> {
        let batch_id = Uuid::new_v4().to_string();
        info!(
            batch_id = %batch_id,
            total_rows = table.rows.len(),
            blank_rows = table.blank_rows,
            "解析完成"
        );
        if table.blank_rows > 0 {
            warn!(batch_id = %batch_id, blank_rows = table.blank_rows, "已跳过空白行");
        }

        // === 步骤 2: 表头校验 ===
        debug!("步骤 2: 表头校验");
        self.field_mapper.validate_headers(&table.headers)?;

        // === 步骤 3: 权重快照（整个批次使用同一份权重） ===
        let weights = self.weight_config.get()?;
        debug!(?weights, "步骤 3: 权重快照");

        // === 步骤 4: 字段映射 + 评分 ===
        debug!("步骤 4: 字段映射与评分");
        let batch = table
            .rows
            .iter()
            .map(|row| {
                let mapped = self.field_mapper.map_to_score_row(row)?;
                let score = self.calculator.calculate(&mapped.metrics, &weights);
                Ok(NewScoreRecord {
                    entity_id: mapped.entity_id,
                    metrics: mapped.metrics,
                    score,
                })
            })
            .collect::<ImportResult<Vec<_>>>()
            .map_err(|e| {
                error!(batch_id = %batch_id, error = %e, "行映射失败，本次导入不落库");
                e
            })?;

        // === 步骤 5: 批量落库 ===
        debug!("步骤 5: 批量落库");
        let stored = self.record_repo.append_batch(batch)?;

        let elapsed_ms = start_time.elapsed().as_millis() as i64;
        info!(
            batch_id = %batch_id,
            imported = stored.len(),
            elapsed_ms = elapsed_ms,
            "导入完成"
        );

        Ok(IngestReport {
            count: stored.len(),
            skipped_blank_rows: table.blank_rows,
            batch_id,
            elapsed_ms,
        })
    }
}
