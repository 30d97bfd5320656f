use wushu_catalog::builtin::MASTER_GONG_BU_CHONG_QUAN;
use wushu_catalog::ReferenceCatalog;
use wushu_core::{to_canonical_json_bytes, Pose, PostureId};
use wushu_score::{analyze_pose_by_name, assess, compare_angles, Assessment, ScoringConfig};

#[test]
fn assessment_roundtrip() {
    let catalog = ReferenceCatalog::builtin();
    let config = ScoringConfig::default();
    let pose: Pose = MASTER_GONG_BU_CHONG_QUAN.into();
    let assessment = assess(&pose, PostureId::GongBuChongQuan, &catalog, &config);
    let json = serde_json::to_string(&assessment).unwrap();
    let restored: Assessment = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, assessment);
}

#[test]
fn error_assessment_carries_structured_cause() {
    let catalog = ReferenceCatalog::builtin();
    let config = ScoringConfig::default();
    let assessment = analyze_pose_by_name("tiger", &Pose::default(), &catalog, &config);
    let value = serde_json::to_value(&assessment).unwrap();
    assert_eq!(value["feedback"]["level"], "error");
    assert_eq!(value["error"]["family"], "Catalog");
    assert_eq!(value["error"]["detail"]["code"], "unknown-posture");
    assert!(value.get("scores").is_none());
}

#[test]
fn canonical_encoding_is_stable() {
    let catalog = ReferenceCatalog::builtin();
    let config = ScoringConfig::default();
    let pose: Pose = MASTER_GONG_BU_CHONG_QUAN.into();
    let first = to_canonical_json_bytes(&assess(&pose, PostureId::GongBuChongQuan, &catalog, &config)).unwrap();
    let second = to_canonical_json_bytes(&assess(&pose, PostureId::GongBuChongQuan, &catalog, &config)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn config_yaml_roundtrip() {
    let mut config = ScoringConfig::default();
    config.include_depth = true;
    config.feedback.angle_deviation_threshold = 15.0;
    let yaml = serde_yaml::to_string(&config).unwrap();
    assert_eq!(ScoringConfig::from_yaml_str(&yaml).unwrap(), config);
}

#[test]
fn comparison_report_serialises_rows() {
    let catalog = ReferenceCatalog::builtin();
    let pose: Pose = MASTER_GONG_BU_CHONG_QUAN.into();
    let report = compare_angles(&pose, PostureId::GongBuChongQuan, &catalog);
    assert_eq!(report.rows.len(), 10);
    assert_eq!(report.agreement, 10.0);
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["rows"][0]["group"], "left_shoulder");
    assert_eq!(value["posture"], "gong_bu_chong_quan");
}
