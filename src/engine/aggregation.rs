// ==========================================
// 绩效评分报表引擎 - 分组聚合引擎
// ==========================================
// 职责: 按实体分组求指标均值 + 跨组合计
// 输出顺序: 按实体首次出现顺序
// ==========================================

use crate::domain::report::{AggregationReport, EntityAggregate};
use crate::domain::score_record::{MetricValues, ScoreRecord};
use std::collections::{HashMap, HashSet};
use tracing::instrument;

#[derive(Default)]
struct GroupAccumulator {
    count: usize,
    productivity: f64,
    quality: f64,
    timeliness: f64,
    score: f64,
}

// ==========================================
// AggregationEngine - 分组聚合引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct AggregationEngine;

impl AggregationEngine {
    pub fn new() -> Self {
        Self
    }

    /// 按实体分组计算均值
    ///
    /// # 参数
    /// - records: 记录快照（按入库顺序）
    /// - entity_filter: 实体过滤集合；None 或空集合表示不过滤
    #[instrument(skip(self, records, entity_filter), fields(records = records.len()))]
    pub fn aggregate_by_entity(
        &self,
        records: &[ScoreRecord],
        entity_filter: Option<&[String]>,
    ) -> Vec<EntityAggregate> {
        let filter: Option<HashSet<&str>> = entity_filter
            .filter(|f| !f.is_empty())
            .map(|f| f.iter().map(String::as_str).collect());

        let mut order: Vec<&str> = Vec::new();
        let mut groups: HashMap<&str, GroupAccumulator> = HashMap::new();

        for record in records {
            let id = record.entity_id.as_str();
            if let Some(allowed) = &filter {
                if !allowed.contains(id) {
                    continue;
                }
            }

            let acc = groups.entry(id).or_insert_with(|| {
                order.push(id);
                GroupAccumulator::default()
            });
            acc.count += 1;
            acc.productivity += record.productivity;
            acc.quality += record.quality;
            acc.timeliness += record.timeliness;
            acc.score += record.score;
        }

        order
            .into_iter()
            .filter_map(|id| {
                let acc = groups.get(id)?;
                let n = acc.count as f64;
                Some(EntityAggregate {
                    entity_id: id.to_string(),
                    record_count: acc.count,
                    averages: MetricValues::new(
                        acc.productivity / n,
                        acc.quality / n,
                        acc.timeliness / n,
                    ),
                    average_score: acc.score / n,
                })
            })
            .collect()
    }

    /// 跨组合计（各组均值逐项相加）
    pub fn totals(&self, groups: &[EntityAggregate]) -> MetricValues {
        groups
            .iter()
            .fold(MetricValues::default(), |mut total, group| {
                total.productivity += group.averages.productivity;
                total.quality += group.averages.quality;
                total.timeliness += group.averages.timeliness;
                total
            })
    }

    /// 分组 + 合计
    pub fn build_report(
        &self,
        records: &[ScoreRecord],
        entity_filter: Option<&[String]>,
    ) -> AggregationReport {
        let groups = self.aggregate_by_entity(records, entity_filter);
        let totals = self.totals(&groups);
        AggregationReport { groups, totals }
    }
}
