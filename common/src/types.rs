//! マニフェストの型定義
//!
//! - ManifestRecord: `manifest_images.json` の1件（全項目）
//! - ParsedRecord: `manifest_images_parsed.json` の1件（取り込み用の部分集合）
//! - ManifestReport: `manifest_report.json`

use crate::error::Result;
use crate::file_id::FileId;
use crate::grammar::{ParsedName, Rejection};
use crate::taxonomy::{category_name, zone_name};
use serde::{Deserialize, Serialize};

/// 画像の向き
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "square")]
    Square,
    #[serde(rename = "landscape")]
    Landscape,
    #[serde(rename = "portrait")]
    Portrait,
    /// 画像を開けなかった
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl Orientation {
    pub fn classify(width: u32, height: u32) -> Self {
        if width == height {
            Orientation::Square
        } else if width > height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// 画像の寸法と向き
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMeta {
    pub width: u32,
    pub height: u32,
    /// EXIF Orientation タグの生値
    pub exif_orientation: Option<u32>,
    pub orientation: Orientation,
}

impl ImageMeta {
    pub fn new(width: u32, height: u32, exif_orientation: Option<u32>) -> Self {
        Self {
            width,
            height,
            exif_orientation,
            orientation: Orientation::classify(width, height),
        }
    }

    /// 画像を開けなかったときの縮退値
    pub fn unknown() -> Self {
        Self {
            width: 0,
            height: 0,
            exif_orientation: None,
            orientation: Orientation::Unknown,
        }
    }
}

/// 検証結果フラグ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validations {
    pub regex_match: bool,
    pub detail_charset: bool,
    pub id_consistency: bool,
    pub viewtype_enum: bool,
}

/// マニフェストの1レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestRecord {
    /// 走査ルートからの相対パス（区切りは `/`）
    pub rel_path: String,
    pub sha256: String,
    pub file_name: String,
    #[serde(rename = "file_ID")]
    pub file_id: u32,
    #[serde(rename = "file_ID_str")]
    pub file_id_str: String,
    #[serde(rename = "zone_ID")]
    pub zone_id: u32,
    pub zone_name: String,
    #[serde(rename = "cat_ID")]
    pub cat_id: u32,
    pub cat_name: String,
    #[serde(rename = "cat_img_ID")]
    pub cat_img_id: u32,
    pub detail: String,
    #[serde(rename = "viewtype_ID")]
    pub viewtype_id: String,
    pub viewtype_name: String,
    pub ext: String,
    pub date: String,
    pub image_width_px: u32,
    pub image_height_px: u32,
    pub orientation: Orientation,
    pub exif_orientation: Option<u32>,
    pub validations: Validations,
}

impl ManifestRecord {
    /// 文法解析結果と画像情報からレコードを組み立てる
    pub fn build(
        rel_path: String,
        file_name: String,
        name: &ParsedName,
        sha256: String,
        meta: ImageMeta,
    ) -> Self {
        let FileId(id) = name.file_id;
        let zone_id = name.file_id.zone_id();
        let cat_id = name.file_id.category_id();

        Self {
            rel_path,
            sha256,
            file_name,
            file_id: id,
            file_id_str: name.file_id_str.clone(),
            zone_id,
            zone_name: zone_name(zone_id).to_string(),
            cat_id,
            cat_name: category_name(cat_id).to_string(),
            cat_img_id: name.file_id.category_image_id(),
            detail: name.detail.clone(),
            viewtype_id: name.view_type.code().to_string(),
            viewtype_name: name.view_type.label().to_string(),
            ext: name.ext.clone(),
            date: name.date.clone(),
            image_width_px: meta.width,
            image_height_px: meta.height,
            orientation: meta.orientation,
            exif_orientation: meta.exif_orientation,
            validations: Validations {
                regex_match: true,
                detail_charset: true,
                id_consistency: name.file_id.is_consistent(),
                viewtype_enum: true,
            },
        }
    }
}

/// `manifest_images.json` の内容を読み込む（下流の取り込み処理用）
pub fn parse_manifest_json(json: &str) -> Result<Vec<ManifestRecord>> {
    let records: Vec<ManifestRecord> = serde_json::from_str(json)?;
    Ok(records)
}

/// 取り込み用の縮約レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecord {
    pub rel_path: String,
    pub file_name: String,
    #[serde(rename = "file_ID")]
    pub file_id: u32,
    #[serde(rename = "file_ID_str")]
    pub file_id_str: String,
    #[serde(rename = "zone_ID")]
    pub zone_id: u32,
    #[serde(rename = "cat_ID")]
    pub cat_id: u32,
    #[serde(rename = "cat_img_ID")]
    pub cat_img_id: u32,
    #[serde(rename = "viewtype_ID")]
    pub viewtype_id: String,
    pub date: String,
    pub sha256: String,
    pub image_width_px: u32,
    pub image_height_px: u32,
    pub orientation: Orientation,
    pub exif_orientation: Option<u32>,
}

impl From<&ManifestRecord> for ParsedRecord {
    fn from(r: &ManifestRecord) -> Self {
        Self {
            rel_path: r.rel_path.clone(),
            file_name: r.file_name.clone(),
            file_id: r.file_id,
            file_id_str: r.file_id_str.clone(),
            zone_id: r.zone_id,
            cat_id: r.cat_id,
            cat_img_id: r.cat_img_id,
            viewtype_id: r.viewtype_id.clone(),
            date: r.date.clone(),
            sha256: r.sha256.clone(),
            image_width_px: r.image_width_px,
            image_height_px: r.image_height_px,
            orientation: r.orientation,
            exif_orientation: r.exif_orientation,
        }
    }
}

/// 却下理由ごとの件数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionCounts {
    pub no_regex_match: usize,
    pub illegal_detail_charset: usize,
    pub unknown_viewtype: usize,
}

impl RejectionCounts {
    pub fn add(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::NoRegexMatch => self.no_regex_match += 1,
            Rejection::IllegalDetailCharset => self.illegal_detail_charset += 1,
            Rejection::UnknownViewType => self.unknown_viewtype += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.no_regex_match + self.illegal_detail_charset + self.unknown_viewtype
    }
}

/// ハッシュ計算に失敗してマニフェストから外したファイル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashFailure {
    pub rel_path: String,
    pub error: String,
}

/// 走査レポート
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestReport {
    /// UTC, ISO-8601（秒まで、末尾 `Z`）
    pub timestamp: String,
    pub scanned_root: String,
    pub total_seen: usize,
    pub parsed: usize,
    pub ignored_non_conform: usize,
    pub unparsed_listed: usize,
    pub pattern_strict: String,
    /// 未解析として一覧に載せたファイルの却下理由内訳
    pub rejections: RejectionCounts,
    pub hash_failures: Vec<HashFailure>,
}
