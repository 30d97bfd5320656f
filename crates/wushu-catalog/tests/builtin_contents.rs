use wushu_catalog::{ReferenceCatalog, DEFAULT_MASTER_ANGLES, GENERIC_COACHING_TIP};
use wushu_core::{JointGroup, Keypoint, Pose, PostureId};

#[test]
fn every_posture_is_catalogued() {
    let catalog = ReferenceCatalog::builtin();
    let postures: Vec<_> = catalog.postures().collect();
    assert_eq!(postures, PostureId::ALL.to_vec());
}

#[test]
fn only_gong_bu_ships_a_master_pose() {
    let catalog = ReferenceCatalog::builtin();
    let pose = catalog.reference_pose(PostureId::GongBuChongQuan).unwrap();
    assert_eq!(pose.len(), 12);
    let err = catalog.reference_pose(PostureId::MengHuChuDong).unwrap_err();
    assert_eq!(err.code(), "missing-reference");
}

#[test]
fn ideal_angles_cover_scored_groups() {
    let catalog = ReferenceCatalog::builtin();
    let gong_bu = catalog.ideal_angles(PostureId::GongBuChongQuan).unwrap();
    assert_eq!(gong_bu.get(JointGroup::RightElbow), Some(68.88));
    assert_eq!(gong_bu.get(JointGroup::RightKnee), Some(162.30));

    let beng_quan = catalog.ideal_angles(PostureId::BingBuBengQuan).unwrap();
    assert_eq!(beng_quan.get(JointGroup::LeftShoulder), Some(45.0));

    assert!(catalog.ideal_angles(PostureId::LuoHanZhangZhang).is_none());
}

#[test]
fn master_angles_fall_back_to_default_profile() {
    let catalog = ReferenceCatalog::builtin();
    assert_eq!(catalog.master_angles(PostureId::MaBuKouChuang), &DEFAULT_MASTER_ANGLES);
    assert_eq!(catalog.master_angles(PostureId::MengHuChuDong)[0], 175.45);
}

#[test]
fn cues_and_coaching_tiers() {
    let catalog = ReferenceCatalog::builtin();
    assert!(catalog.cue(PostureId::MaBuTuiZhang).unwrap().starts_with("马步推掌要点"));
    assert!(catalog.cue(PostureId::GunShenChongQuan).is_none());

    assert!(catalog.coaching_tip(PostureId::GongBuChongQuan, 3.0).starts_with("弓步不够稳定"));
    assert!(catalog.coaching_tip(PostureId::GongBuChongQuan, 6.5).starts_with("弓步较好"));
    assert!(catalog.coaching_tip(PostureId::GongBuChongQuan, 9.0).starts_with("动作标准"));
    assert_eq!(catalog.coaching_tip(PostureId::MaBuTuiZhang, 9.0), GENERIC_COACHING_TIP);
}

#[test]
fn summary_flags_reference_poses() {
    let catalog = ReferenceCatalog::builtin();
    let summary = catalog.summary();
    assert_eq!(summary.len(), 10);
    let with_pose: Vec<_> = summary
        .iter()
        .filter(|row| row.has_reference_pose)
        .map(|row| row.posture)
        .collect();
    assert_eq!(with_pose, vec![PostureId::GongBuChongQuan]);
    assert_eq!(summary[0].name, "弓步冲拳");
    assert_eq!(summary[0].ideal_angle_count, 6);
}

#[test]
fn with_reference_pose_leaves_the_source_untouched() {
    let builtin = ReferenceCatalog::builtin();
    let pose: Pose = vec![Keypoint::new(1.0, 2.0, 3.0); 12].into();
    let extended = builtin.with_reference_pose(PostureId::YuanHouNaZhou, pose.clone());
    assert_eq!(extended.reference_pose(PostureId::YuanHouNaZhou).unwrap(), &pose);
    assert!(builtin.reference_pose(PostureId::YuanHouNaZhou).is_err());
    assert_eq!(
        extended.ideal_angles(PostureId::YuanHouNaZhou),
        builtin.ideal_angles(PostureId::YuanHouNaZhou)
    );
    assert_ne!(extended.fingerprint().unwrap(), builtin.fingerprint().unwrap());
}

#[test]
fn empty_master_pose_counts_as_missing() {
    let catalog =
        ReferenceCatalog::builtin().with_reference_pose(PostureId::GongBuChongQuan, Pose::default());
    assert!(catalog.reference_pose(PostureId::GongBuChongQuan).is_err());
}
