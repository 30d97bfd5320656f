//! Closed enumeration of the catalog postures.

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::WushuError;

/// Postures known to the reference catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostureId {
    /// 弓步冲拳: bow stance straight punch.
    GongBuChongQuan,
    /// 猛虎出洞: tiger leaves the cave.
    MengHuChuDong,
    /// 五花坐山: five flowers sitting on the mountain.
    WuHuaZuoShan,
    /// 滚身冲拳: rolling body punch.
    GunShenChongQuan,
    /// 猿猴纳肘: ape draws in the elbow.
    YuanHouNaZhou,
    /// 马步推掌: horse stance palm push.
    MaBuTuiZhang,
    /// 并步崩拳: feet-together crushing punch.
    BingBuBengQuan,
    /// 狮子张嘴: lion opens its mouth.
    ShiZiZhangZui,
    /// 马步扣床: horse stance bed clasp.
    MaBuKouChuang,
    /// 罗汉张掌: arhat opens the palms.
    LuoHanZhangZhang,
}

impl PostureId {
    /// Every posture in catalog order.
    pub const ALL: [PostureId; 10] = [
        PostureId::GongBuChongQuan,
        PostureId::MengHuChuDong,
        PostureId::WuHuaZuoShan,
        PostureId::GunShenChongQuan,
        PostureId::YuanHouNaZhou,
        PostureId::MaBuTuiZhang,
        PostureId::BingBuBengQuan,
        PostureId::ShiZiZhangZui,
        PostureId::MaBuKouChuang,
        PostureId::LuoHanZhangZhang,
    ];

    /// Chinese display name.
    pub fn name(self) -> &'static str {
        match self {
            PostureId::GongBuChongQuan => "弓步冲拳",
            PostureId::MengHuChuDong => "猛虎出洞",
            PostureId::WuHuaZuoShan => "五花坐山",
            PostureId::GunShenChongQuan => "滚身冲拳",
            PostureId::YuanHouNaZhou => "猿猴纳肘",
            PostureId::MaBuTuiZhang => "马步推掌",
            PostureId::BingBuBengQuan => "并步崩拳",
            PostureId::ShiZiZhangZui => "狮子张嘴",
            PostureId::MaBuKouChuang => "马步扣床",
            PostureId::LuoHanZhangZhang => "罗汉张掌",
        }
    }

    /// Snake case code, identical to the serde representation.
    pub fn code(self) -> &'static str {
        match self {
            PostureId::GongBuChongQuan => "gong_bu_chong_quan",
            PostureId::MengHuChuDong => "meng_hu_chu_dong",
            PostureId::WuHuaZuoShan => "wu_hua_zuo_shan",
            PostureId::GunShenChongQuan => "gun_shen_chong_quan",
            PostureId::YuanHouNaZhou => "yuan_hou_na_zhou",
            PostureId::MaBuTuiZhang => "ma_bu_tui_zhang",
            PostureId::BingBuBengQuan => "bing_bu_beng_quan",
            PostureId::ShiZiZhangZui => "shi_zi_zhang_zui",
            PostureId::MaBuKouChuang => "ma_bu_kou_chuang",
            PostureId::LuoHanZhangZhang => "luo_han_zhang_zhang",
        }
    }

    /// Looks up a posture by Chinese name, snake case code or compact pinyin.
    pub fn parse(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        if let Some(found) = Self::ALL.iter().find(|p| p.name() == trimmed) {
            return Some(*found);
        }
        let compact: String = trimmed
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .iter()
            .find(|p| p.code().replace('_', "") == compact)
            .copied()
    }
}

impl Display for PostureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PostureId {
    type Err = WushuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| WushuError::unknown_posture(s))
    }
}
