// ==========================================
// ScoreApi 集成测试
// ==========================================
// 测试目标: 新增/导入/查询/权重/聚合的端到端行为
// ==========================================

mod test_helpers;

use score_report::api::{AddRecordRequest, ApiError};
use score_report::config::{ExportProfile, WeightConfig};
use score_report::domain::{MetricInput, MetricValues};
use score_report::logging;
use score_report::AppState;
use test_helpers::{add_records, create_test_state, partial_weights, SAMPLE_CSV};

#[test]
fn test_default_weights_example_score() {
    logging::init_test();
    let state = create_test_state();

    let record = state
        .score_api
        .add_record(AddRecordRequest::new("E1", 80.0, 90.0, 70.0))
        .unwrap();

    assert_eq!(record.entity_id, "E1");
    assert_eq!(record.score, 81.0);
    assert_eq!(record.metrics(), MetricValues::new(80.0, 90.0, 70.0));
}

#[test]
fn test_scores_are_frozen_after_weight_change() {
    logging::init_test();
    let state = create_test_state();

    let before = state
        .score_api
        .add_record(AddRecordRequest::new("E1", 80.0, 90.0, 70.0))
        .unwrap();

    let weights = state
        .score_api
        .set_weights(&partial_weights(&[("productivity", 1.0), ("quality", 0.0), ("timeliness", 0.0)]))
        .unwrap();
    assert_eq!(weights, WeightConfig::new(1.0, 0.0, 0.0));

    let after = state
        .score_api
        .add_record(AddRecordRequest::new("E1", 80.0, 90.0, 70.0))
        .unwrap();

    let records = state.score_api.list_records(None).unwrap();
    assert_eq!(records[0].score, before.score);
    assert_eq!(records[0].score, 81.0);
    assert_eq!(after.score, 80.0);
}

#[test]
fn test_partial_weight_update_keeps_other_coefficients() {
    let state = create_test_state();

    let weights = state
        .score_api
        .set_weights(&partial_weights(&[("quality", 0.6)]))
        .unwrap();

    assert_eq!(weights.productivity, 0.5);
    assert_eq!(weights.quality, 0.6);
    assert_eq!(weights.timeliness, 0.2);
    assert_eq!(state.score_api.get_weights().unwrap(), weights);
}

#[test]
fn test_weights_from_json_body() {
    let state = create_test_state();
    let partial = serde_json::from_str(r#"{"timeliness": "0.4", "bonus": 9}"#).unwrap();

    let outcome = state.score_api.set_weights_detailed(&partial).unwrap();

    assert_eq!(outcome.weights.timeliness, 0.4);
    assert_eq!(outcome.ignored_keys, vec!["bonus".to_string()]);
}

#[test]
fn test_weights_snapshot_restore_roundtrip() {
    let state = create_test_state();
    state
        .score_api
        .set_weights(&partial_weights(&[("productivity", 0.7)]))
        .unwrap();
    let snapshot = state.score_api.weights_snapshot().unwrap();

    let other = AppState::with_config(WeightConfig::new(0.0, 0.0, 0.0), ExportProfile::default());
    let restored = other.score_api.restore_weights(&snapshot).unwrap();

    assert_eq!(restored, state.score_api.get_weights().unwrap());
}

#[test]
fn test_add_record_rejects_missing_fields() {
    let state = create_test_state();

    let blank_id = state
        .score_api
        .add_record(AddRecordRequest::new("   ", 1.0, 1.0, 1.0));
    assert!(matches!(blank_id, Err(ApiError::ValidationError(_))));

    let mut missing_metric = AddRecordRequest::new("E1", 1.0, 1.0, 1.0);
    missing_metric.quality = None;
    let result = state.score_api.add_record(missing_metric);
    assert!(matches!(result, Err(ApiError::ValidationError(_))));

    assert!(state.score_api.list_records(None).unwrap().is_empty());
}

#[test]
fn test_unparseable_metric_counts_as_zero() {
    let state = create_test_state();

    let record = state
        .score_api
        .add_record(AddRecordRequest::new("E1", MetricInput::from("n/a"), 100.0, 100.0))
        .unwrap();

    assert_eq!(record.productivity, 0.0);
    assert_eq!(record.score, 50.0);
}

#[test]
fn test_ingest_then_query() {
    logging::init_test();
    let state = create_test_state();

    let report = state.score_api.ingest_text(SAMPLE_CSV).unwrap();
    assert_eq!(report.count, 3);

    let e1 = state.score_api.list_records(Some("E1")).unwrap();
    assert_eq!(e1.len(), 2);
    assert_eq!(e1[0].score, 81.0);
    assert_eq!(e1[1].score, 100.0);

    assert_eq!(
        state.score_api.list_entities().unwrap(),
        vec!["E1".to_string(), "E2".to_string()]
    );
}

#[test]
fn test_failed_ingest_leaves_store_untouched() {
    let state = create_test_state();
    add_records(&state, &[("E0", 1.0, 1.0, 1.0)]).unwrap();

    let err = state
        .score_api
        .ingest_text("entityId,productivity\nE1,10\n,20\n")
        .unwrap_err();

    assert_eq!(err.code(), "PARSE_ERROR");
    assert_eq!(state.score_api.list_records(None).unwrap().len(), 1);
}

#[test]
fn test_aggregate_groups_and_totals() {
    let state = create_test_state();
    add_records(
        &state,
        &[
            ("A", 10.0, 20.0, 30.0),
            ("B", 1.0, 2.0, 3.0),
            ("A", 20.0, 20.0, 20.0),
        ],
    )
    .unwrap();

    let report = state.score_api.aggregate(&[]).unwrap();
    assert_eq!(report.groups.len(), 2);
    assert_eq!(report.groups[0].entity_id, "A");
    assert_eq!(report.groups[0].record_count, 2);
    assert_eq!(report.groups[0].averages, MetricValues::new(15.0, 20.0, 25.0));
    assert_eq!(report.totals, MetricValues::new(16.0, 22.0, 28.0));

    let only_b = state.score_api.aggregate(&["B".to_string()]).unwrap();
    assert_eq!(only_b.groups.len(), 1);
    assert_eq!(only_b.groups[0].entity_id, "B");
}

#[test]
fn test_unterminated_quote_is_parse_error() {
    let state = create_test_state();
    add_records(&state, &[("E0", 1.0, 1.0, 1.0)]).unwrap();

    let err = state
        .score_api
        .ingest_text("entityId,productivity,quality,timeliness\nE1,\"80,90,70\nE2,60,70,80\nE3,100,100,100\n")
        .unwrap_err();

    assert!(matches!(err, ApiError::ParseError(_)));
    assert_eq!(state.score_api.list_records(None).unwrap().len(), 1);
}

#[test]
fn test_overflowing_weight_exports_finite_score() {
    let state = create_test_state();
    state
        .score_api
        .set_weights(&partial_weights(&[("productivity", 1e307)]))
        .unwrap();

    let record = state
        .score_api
        .add_record(AddRecordRequest::new("E1", 10.0, 0.0, 0.0))
        .unwrap();
    assert!(record.score.is_finite());

    let csv_text = String::from_utf8(state.score_api.export_delimited().unwrap().bytes).unwrap();
    assert!(!csv_text.contains("inf"));
}
