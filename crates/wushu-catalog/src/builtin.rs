//! Shipped reference data.
//!
//! Master angle profiles are listed in tracked-angle order (left/right shoulder,
//! left/right elbow, left/right hip, left/right pelvis, left/right knee).

use std::collections::BTreeMap;

use wushu_core::{JointGroup, Keypoint, Pose, PostureId};

use crate::{CoachingTiers, IdealAngleMap, ReferencePosture};

/// Profile used for postures without recorded master angles.
pub const DEFAULT_MASTER_ANGLES: [f64; 10] = [
    160.0, 160.0, 120.0, 120.0, 150.0, 150.0, 140.0, 140.0, 160.0, 160.0,
];

/// Master coordinates for 弓步冲拳 (12-joint layout).
pub const MASTER_GONG_BU_CHONG_QUAN: [(f64, f64, f64); 12] = [
    (-315.33990, -532.44751, 1269.14111),
    (-544.24274, -819.86749, 1246.98901),
    (-25.55933, -498.01904, 1187.82007),
    (-745.96863, -751.89502, 964.75372),
    (194.10724, -641.67169, 1270.74231),
    (-701.79169, -621.17615, 719.50769),
    (-391.04510, -428.42917, 796.12347),
    (-614.52740, -764.30566, 756.52966),
    (-105.98969, -561.29327, 502.54788),
    (-737.99744, -702.86261, 323.24124),
    (-139.23065, -465.05334, 50.85522),
    (-1062.92981, -587.08008, 73.93146),
];

const SCORED_GROUPS: [(usize, JointGroup); 6] = [
    (0, JointGroup::LeftShoulder),
    (1, JointGroup::RightShoulder),
    (2, JointGroup::LeftElbow),
    (3, JointGroup::RightElbow),
    (8, JointGroup::LeftKnee),
    (9, JointGroup::RightKnee),
];

fn master_angles(posture: PostureId) -> Option<[f64; 10]> {
    let profile = match posture {
        PostureId::GongBuChongQuan => [
            155.60, 159.79, 115.97, 68.88, 151.87, 176.27, 134.59, 135.88, 150.69, 162.30,
        ],
        PostureId::MengHuChuDong => [
            175.45, 174.67, 130.23, 131.45, 165.67, 166.89, 155.34, 154.56, 170.78, 169.90,
        ],
        PostureId::WuHuaZuoShan => [
            90.45, 92.67, 95.23, 96.45, 125.67, 124.89, 90.34, 89.56, 135.78, 136.90,
        ],
        PostureId::GunShenChongQuan => [
            160.45, 150.67, 120.23, 110.45, 145.67, 146.89, 140.34, 139.56, 155.78, 156.90,
        ],
        PostureId::YuanHouNaZhou => [
            145.45, 144.67, 100.23, 101.45, 140.67, 141.89, 130.34, 129.56, 150.78, 151.90,
        ],
        PostureId::MaBuTuiZhang => [
            170.45, 171.67, 110.23, 111.45, 150.67, 151.89, 120.34, 119.56, 160.78, 161.90,
        ],
        _ => return None,
    };
    Some(profile)
}

/// Targets are the master profile values of the scored groups, so an
/// identical pose scores full marks; only 并步崩拳 uses a separately authored table.
fn ideal_angles(posture: PostureId) -> IdealAngleMap {
    if let Some(profile) = master_angles(posture) {
        return SCORED_GROUPS
            .iter()
            .map(|&(idx, group)| (group, profile[idx]))
            .collect();
    }
    match posture {
        PostureId::BingBuBengQuan => [
            (JointGroup::LeftShoulder, 45.0),
            (JointGroup::RightShoulder, 90.0),
            (JointGroup::LeftElbow, 170.0),
            (JointGroup::RightElbow, 90.0),
            (JointGroup::LeftKnee, 170.0),
            (JointGroup::RightKnee, 170.0),
        ]
        .into_iter()
        .collect(),
        _ => IdealAngleMap::default(),
    }
}

fn cue(posture: PostureId) -> Option<&'static str> {
    match posture {
        PostureId::GongBuChongQuan => Some(
            "弓步冲拳要点：前腿弯曲，膝盖在脚尖上方；后腿伸直；上体挺直；拳头与肩同高，拳眼朝下",
        ),
        PostureId::MengHuChuDong => Some(
            "猛虎出洞要点：双手成虎爪状；手臂伸展有力；虎爪五指张开，指尖用力；站姿稳定",
        ),
        PostureId::WuHuaZuoShan => {
            Some("五花坐山要点：下肢稳固盘坐；上身保持挺直；手臂动作圆融协调")
        }
        PostureId::MaBuTuiZhang => {
            Some("马步推掌要点：马步要稳，两腿平行弯曲；上体挺直；双掌向前推出，掌心向前")
        }
        PostureId::BingBuBengQuan => {
            Some("并步崩拳要点：两脚并拢站立；上体挺直；拳头从腰间发力，向前直击")
        }
        _ => None,
    }
}

fn coaching(posture: PostureId) -> Option<CoachingTiers> {
    let (low, mid, high) = match posture {
        PostureId::GongBuChongQuan => (
            "弓步不够稳定，前腿弯曲不足，拳头位置过低。请注意：\n1. 前腿膝盖应在脚尖上方\n2. 拳头应与肩同高\n3. 后腿需绷直",
            "弓步较好，但仍有提升空间：\n1. 重心可以更加前倾\n2. 拳头收紧，手臂伸展更有力\n3. 腰背保持挺直",
            "动作标准！保持良好的弓步姿势和有力的冲拳。继续保持！",
        ),
        PostureId::MengHuChuDong => (
            "虎爪姿势不够标准，站立不稳。请注意：\n1. 虎爪五指张开，指尖用力\n2. 手臂伸展更有力\n3. 步伐要稳健有力",
            "虎爪形态较好，但力量感不足：\n1. 增强前冲的爆发力\n2. 虎爪姿势更加紧凑\n3. 身体重心保持稳定",
            "动作有力！虎爪姿态标准，冲击力十足。继续保持这种猛虎出洞的力量感！",
        ),
        PostureId::WuHuaZuoShan => (
            "盘坐不够稳，上身摆动过大。请注意：\n1. 下肢稳固盘坐\n2. 上身保持挺直\n3. 手臂动作更加协调",
            "姿势较为稳定，但流畅度不足：\n1. 手臂动作可以更加圆融\n2. 呼吸与动作结合更紧密\n3. 上身保持中正",
            "动作流畅！盘坐稳健，手臂五花动作圆润自然。坐山态势威严大方，继续保持！",
        ),
        _ => return None,
    };
    Some(CoachingTiers {
        low: low.to_string(),
        mid: mid.to_string(),
        high: high.to_string(),
    })
}

fn master_pose(posture: PostureId) -> Option<Pose> {
    match posture {
        PostureId::GongBuChongQuan => Some(
            MASTER_GONG_BU_CHONG_QUAN
                .iter()
                .copied()
                .map(Keypoint::from)
                .collect(),
        ),
        _ => None,
    }
}

pub(crate) fn entries() -> BTreeMap<PostureId, ReferencePosture> {
    PostureId::ALL
        .into_iter()
        .map(|posture| {
            let entry = ReferencePosture {
                master_pose: master_pose(posture),
                ideal_angles: ideal_angles(posture),
                master_angles: master_angles(posture).map(|profile| profile.to_vec()),
                cue: cue(posture).map(str::to_string),
                coaching: coaching(posture),
            };
            (posture, entry)
        })
        .collect()
}
