// ==========================================
// 绩效评分报表引擎 - 评分计算器
// ==========================================
// 公式: score = round2(P*Wp + Q*Wq + T*Wt)
// 舍入: 保留两位小数,四舍五入(远离零)
// ==========================================
// 红线: 纯函数,不读取共享状态,不产生副作用
// ==========================================

use crate::config::weight_config::WeightConfig;
use crate::domain::score_record::MetricValues;
use crate::domain::types::Metric;

// ==========================================
// ScoreCalculator - 评分计算器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// 创建新的评分计算器
    pub fn new() -> Self {
        Self
    }

    /// 计算加权评分
    ///
    /// 非有限数值（NaN/inf）按 0 参与计算
    pub fn calculate(&self, metrics: &MetricValues, weights: &WeightConfig) -> f64 {
        let total: f64 = Metric::ALL
            .iter()
            .map(|m| finite_or_zero(metrics.get(*m)) * weights.get(*m))
            .sum();
        round2(total)
    }
}

/// 文本指标转数值：缺失/空白/无法解析/非有限 → 0
pub fn coerce_metric(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .map(finite_or_zero)
        .unwrap_or(0.0)
}

/// 保留两位小数（半数远离零）
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    // 放大后可能溢出为 inf；同时消除 -0.0
    if !rounded.is_finite() || rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_example() {
        let calc = ScoreCalculator::new();
        let score = calc.calculate(
            &MetricValues::new(80.0, 90.0, 70.0),
            &WeightConfig::default(),
        );
        assert_eq!(score, 81.0);
    }

    #[test]
    fn test_matches_weighted_sum_formula() {
        let calc = ScoreCalculator::new();
        let weights = WeightConfig::new(0.45, 0.35, 0.25);
        let cases = [
            (10.0, 20.0, 30.0),
            (0.0, 0.0, 0.0),
            (99.9, 1.1, 45.5),
            (-12.0, 7.0, 3.3),
        ];

        for (p, q, t) in cases {
            let expected = round2(p * 0.45 + q * 0.35 + t * 0.25);
            let score = calc.calculate(&MetricValues::new(p, q, t), &weights);
            assert_eq!(score, expected);
            // 重复计算结果一致
            assert_eq!(score, calc.calculate(&MetricValues::new(p, q, t), &weights));
        }
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(round2(1.125), 1.13);
        assert_eq!(round2(-1.125), -1.13);
        assert_eq!(round2(2.0), 2.0);
        assert_eq!(round2(33.333333), 33.33);
    }

    #[test]
    fn test_round2_never_yields_negative_zero() {
        let value = round2(-0.001);
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn test_round2_overflow_yields_zero() {
        assert_eq!(round2(1e307), 0.0);
        assert_eq!(round2(-1e307), 0.0);
        assert_eq!(round2(f64::NAN), 0.0);
    }

    #[test]
    fn test_huge_weight_never_stores_infinite_score() {
        let calc = ScoreCalculator::new();
        let score = calc.calculate(
            &MetricValues::new(10.0, 0.0, 0.0),
            &WeightConfig::new(1e307, 0.0, 0.0),
        );
        assert!(score.is_finite());
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_non_finite_metric_contributes_zero() {
        let calc = ScoreCalculator::new();
        let score = calc.calculate(
            &MetricValues::new(f64::NAN, 10.0, f64::INFINITY),
            &WeightConfig::default(),
        );
        assert_eq!(score, 3.0);
    }

    #[test]
    fn test_coerce_metric() {
        assert_eq!(coerce_metric(Some("42.5")), 42.5);
        assert_eq!(coerce_metric(Some("  7 ")), 7.0);
        assert_eq!(coerce_metric(Some("")), 0.0);
        assert_eq!(coerce_metric(Some("n/a")), 0.0);
        assert_eq!(coerce_metric(Some("inf")), 0.0);
        assert_eq!(coerce_metric(None), 0.0);
    }
}
