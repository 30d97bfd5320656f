use proptest::prelude::*;
use wushu_catalog::builtin::MASTER_GONG_BU_CHONG_QUAN;
use wushu_catalog::ReferenceCatalog;
use wushu_core::{JointGroup, Keypoint, Pose, PostureId};
use wushu_score::{calculate_angles, score_angles, AngleResult, ScoringConfig, ANGLE_SPECS};

fn coordinate() -> impl Strategy<Value = f64> {
    -1500.0f64..1500.0
}

fn pose_strategy() -> impl Strategy<Value = Pose> {
    prop_oneof![Just(12usize), Just(13usize)]
        .prop_flat_map(|len| {
            prop::collection::vec((coordinate(), coordinate(), coordinate()), len)
        })
        .prop_map(|points| points.into_iter().map(Keypoint::from).collect())
}

proptest! {
    #[test]
    fn ten_angles_within_range(pose in pose_strategy()) {
        let angles = calculate_angles(&pose).unwrap();
        prop_assert_eq!(angles.len(), 10);
        for (angle, spec) in angles.iter().zip(ANGLE_SPECS.iter()) {
            prop_assert_eq!(angle.group, spec.group);
            prop_assert!((0.0..=180.0).contains(&angle.degrees), "{} out of range", angle.degrees);
        }
    }

    #[test]
    fn angle_score_never_rises_with_deviation(
        signs in prop::collection::vec(any::<bool>(), 6),
        magnitudes in prop::collection::vec(0.0f64..40.0, 6),
        low in 0.0f64..2.0,
        extra in 0.0f64..2.0,
    ) {
        let catalog = ReferenceCatalog::builtin();
        let config = ScoringConfig::default();
        let ideal = catalog.ideal_angles(PostureId::GongBuChongQuan).unwrap();
        let perturbed = |scale: f64| -> Vec<AngleResult> {
            ideal
                .iter()
                .zip(signs.iter().zip(magnitudes.iter()))
                .map(|((group, target), (positive, magnitude))| {
                    let delta = if *positive { *magnitude } else { -*magnitude };
                    AngleResult { group, label: String::new(), degrees: target + delta * scale }
                })
                .collect()
        };
        let near = score_angles(&perturbed(low), PostureId::GongBuChongQuan, &catalog, &config);
        let far = score_angles(&perturbed(low + extra), PostureId::GongBuChongQuan, &catalog, &config);
        prop_assert!(far <= near + 1e-9, "near {} far {}", near, far);
    }
}

#[test]
fn master_pose_reproduces_its_angle_profile() {
    let pose: Pose = MASTER_GONG_BU_CHONG_QUAN.into();
    let catalog = ReferenceCatalog::builtin();
    let profile = catalog.master_angles(PostureId::GongBuChongQuan);
    let angles = calculate_angles(&pose).unwrap();
    for (angle, expected) in angles.iter().zip(profile) {
        assert!(
            (angle.degrees - expected).abs() < 0.01,
            "{}: {} vs {}",
            angle.label,
            angle.degrees,
            expected
        );
    }
}

#[test]
fn hip_and_pelvis_groups_have_no_shipped_targets() {
    let catalog = ReferenceCatalog::builtin();
    let ideal = catalog.ideal_angles(PostureId::GongBuChongQuan).unwrap();
    for group in [
        JointGroup::LeftHip,
        JointGroup::RightHip,
        JointGroup::LeftPelvis,
        JointGroup::RightPelvis,
    ] {
        assert!(ideal.get(group).is_none());
    }
    assert_eq!(ideal.len(), 6);
}
