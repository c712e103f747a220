//! 分類表（ゾーン・カテゴリ・撮影種別）
//!
//! ゾーンとカテゴリは拡張前提の表なので、未登録の番号は
//! エラーにせず [`UNKNOWN`] を返す。

use serde::{Deserialize, Serialize};

/// 未登録キーに対する名称
pub const UNKNOWN: &str = "UNKNOWN";

/// ゾーン番号から名称を引く
pub fn zone_name(zone_id: u32) -> &'static str {
    match zone_id {
        0 => "CHANTIER",
        1 => "PLAN",
        2 => "SDB",
        3 => "WC",
        _ => UNKNOWN,
    }
}

/// カテゴリ番号から名称を引く
pub fn category_name(category_id: u32) -> &'static str {
    match category_id {
        0 => "VUE GENERALE",
        1 => "PLOMBERIE",
        2 => "BAIGNOIRE",
        3 => "CARRELAGE",
        4 => "FENETRE",
        5 => "PLAFOND",
        6 => "PLATRERIE",
        7 => "SANITAIRE",
        8 => "PLACARD",
        9 => "EXISTANT",
        _ => UNKNOWN,
    }
}

/// 撮影種別（ファイル名の3文字コード）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewType {
    /// パノラマ
    #[serde(rename = "PAN")]
    Panoramic,
    /// 全景
    #[serde(rename = "GEN")]
    General,
    /// 近景
    #[serde(rename = "DET")]
    Detail,
    /// マクロ
    #[serde(rename = "MAC")]
    Macro,
    /// 壁と壁の取り合い
    #[serde(rename = "MGM")]
    WallWall,
    /// 壁と床の取り合い
    #[serde(rename = "MGS")]
    WallFloor,
    /// 壁と天井の取り合い
    #[serde(rename = "MGP")]
    WallCeiling,
    /// 壁と浴槽の取り合い
    #[serde(rename = "MGB")]
    WallBathtub,
    /// 既存部の損傷
    #[serde(rename = "DEG")]
    ExistingDamage,
}

impl ViewType {
    pub const ALL: [ViewType; 9] = [
        ViewType::Panoramic,
        ViewType::General,
        ViewType::Detail,
        ViewType::Macro,
        ViewType::WallWall,
        ViewType::WallFloor,
        ViewType::WallCeiling,
        ViewType::WallBathtub,
        ViewType::ExistingDamage,
    ];

    /// 3文字コードから引く（大文字小文字を区別）
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.code() == code)
    }

    pub fn code(&self) -> &'static str {
        match self {
            ViewType::Panoramic => "PAN",
            ViewType::General => "GEN",
            ViewType::Detail => "DET",
            ViewType::Macro => "MAC",
            ViewType::WallWall => "MGM",
            ViewType::WallFloor => "MGS",
            ViewType::WallCeiling => "MGP",
            ViewType::WallBathtub => "MGB",
            ViewType::ExistingDamage => "DEG",
        }
    }

    /// マニフェストに書き出す説明ラベル
    pub fn label(&self) -> &'static str {
        match self {
            ViewType::Panoramic => "VUE PANORAMIQUE",
            ViewType::General => "VUE GENERALE",
            ViewType::Detail => "VUE PROCHE",
            ViewType::Macro => "VUE MACRO",
            ViewType::WallWall => "INTERACTION MUR-MUR",
            ViewType::WallFloor => "INTERACTION MUR-SOL",
            ViewType::WallCeiling => "INTERACTION MUR-PLAFOND",
            ViewType::WallBathtub => "INTERACTION MUR-BAIGNOIRE",
            ViewType::ExistingDamage => "DEGAT SUR EXISTANT",
        }
    }
}

impl std::fmt::Display for ViewType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
