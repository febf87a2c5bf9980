// ==========================================
// 绩效评分报表引擎 - 评分记录仓储
// ==========================================
// 存储: 进程内有序序列（只追加）
// 红线: 不提供更新/删除；插入顺序是唯一的排序保证
// ==========================================

use crate::domain::score_record::{NewScoreRecord, ScoreRecord};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, SubsecRound, Utc};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

// ==========================================
// ScoreRecordRepository - 评分记录仓储
// ==========================================
#[derive(Default)]
pub struct ScoreRecordRepository {
    records: Mutex<Vec<ScoreRecord>>,
}

impl ScoreRecordRepository {
    /// 创建空仓储
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> RepositoryResult<MutexGuard<'_, Vec<ScoreRecord>>> {
        self.records
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 入库时间（毫秒精度，与导出格式一致）
    fn now() -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }

    /// 追加单条记录
    ///
    /// # 返回
    /// - Ok(ScoreRecord): 已入库记录（含时间戳）
    pub fn append(&self, record: NewScoreRecord) -> RepositoryResult<ScoreRecord> {
        let stored = ScoreRecord::from_new(record, Self::now());
        let mut records = self.lock()?;
        records.push(stored.clone());
        debug!(entity_id = %stored.entity_id, total = records.len(), "记录已追加");
        Ok(stored)
    }

    /// 批量追加（一次加锁，要么全部可见要么全部不可见）
    pub fn append_batch(&self, batch: Vec<NewScoreRecord>) -> RepositoryResult<Vec<ScoreRecord>> {
        let timestamp = Self::now();
        let stored: Vec<ScoreRecord> = batch
            .into_iter()
            .map(|r| ScoreRecord::from_new(r, timestamp))
            .collect();

        let mut records = self.lock()?;
        records.extend(stored.iter().cloned());
        debug!(appended = stored.len(), total = records.len(), "批量记录已追加");
        Ok(stored)
    }

    /// 全量快照（调用时刻，之后的追加不可见）
    pub fn all(&self) -> RepositoryResult<Vec<ScoreRecord>> {
        Ok(self.lock()?.clone())
    }

    /// 按实体过滤（精确匹配，大小写敏感）
    pub fn filter_by_entity(&self, entity_id: &str) -> RepositoryResult<Vec<ScoreRecord>> {
        let records = self.lock()?;
        Ok(records
            .iter()
            .filter(|r| r.entity_id == entity_id)
            .cloned()
            .collect())
    }

    /// 记录总数
    pub fn count(&self) -> RepositoryResult<usize> {
        Ok(self.lock()?.len())
    }

    /// 去重后的实体ID（按首次出现顺序）
    pub fn entity_ids(&self) -> RepositoryResult<Vec<String>> {
        let records = self.lock()?;
        let mut seen: HashSet<&str> = HashSet::new();
        let mut ids = Vec::new();
        for record in records.iter() {
            if seen.insert(record.entity_id.as_str()) {
                ids.push(record.entity_id.clone());
            }
        }
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::score_record::MetricValues;

    fn new_record(id: &str, score: f64) -> NewScoreRecord {
        NewScoreRecord {
            entity_id: id.to_string(),
            metrics: MetricValues::new(1.0, 2.0, 3.0),
            score,
        }
    }

    #[test]
    fn test_append_preserves_order_and_assigns_timestamp() {
        let repo = ScoreRecordRepository::new();
        let before = Utc::now().trunc_subsecs(3);

        let first = repo.append(new_record("A", 1.0)).unwrap();
        repo.append(new_record("B", 2.0)).unwrap();
        repo.append(new_record("A", 3.0)).unwrap();

        assert!(first.timestamp >= before);
        let scores: Vec<f64> = repo.all().unwrap().iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_appends() {
        let repo = ScoreRecordRepository::new();
        repo.append(new_record("A", 1.0)).unwrap();

        let snapshot = repo.all().unwrap();
        repo.append(new_record("B", 2.0)).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_filter_by_entity_is_exact() {
        let repo = ScoreRecordRepository::new();
        repo.append(new_record("X", 1.0)).unwrap();
        repo.append(new_record("x", 2.0)).unwrap();
        repo.append(new_record("X ", 3.0)).unwrap();
        repo.append(new_record("X", 4.0)).unwrap();

        let scores: Vec<f64> = repo
            .filter_by_entity("X")
            .unwrap()
            .iter()
            .map(|r| r.score)
            .collect();
        assert_eq!(scores, vec![1.0, 4.0]);
    }

    #[test]
    fn test_append_batch_shares_timestamp() {
        let repo = ScoreRecordRepository::new();
        let stored = repo
            .append_batch(vec![new_record("A", 1.0), new_record("B", 2.0)])
            .unwrap();

        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].timestamp, stored[1].timestamp);
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_entity_ids_distinct_in_first_appearance_order() {
        let repo = ScoreRecordRepository::new();
        for id in ["B", "A", "B", "C", "A"] {
            repo.append(new_record(id, 0.0)).unwrap();
        }
        assert_eq!(repo.entity_ids().unwrap(), vec!["B", "A", "C"]);
    }
}
