//! ファイル名文法（厳格モード）
//!
//! `<file_ID:4桁>_<DETAIL>_<VIEWTYPE:3文字>[_YYYYMMDD].<ext>`
//!
//! - DETAIL: 大文字・アクセント付き大文字・数字のトークンを単一のハイフンで連結
//! - VIEWTYPE: [`ViewType`] のいずれか
//! - ext: jpg / jpeg / png / webp / tiff（小文字のみ）
//!
//! 大文字小文字は区別する。`0001_sdb_gen.jpg` は文法不一致として扱う。

use crate::file_id::FileId;
use crate::taxonomy::ViewType;
use regex::Regex;

/// レポートに記録する厳格パターン
pub const STRICT_PATTERN_STR: &str = concat!(
    r"^(?P<file_ID>[0-9]{4})_",
    r"(?P<detail>[A-Z0-9À-ÖØ-Ý]+(?:-[A-Z0-9À-ÖØ-Ý]+)*)_",
    r"(?P<viewtype>[A-Z]{3})",
    r"(?:_(?P<date>[0-9]{8}))?",
    r"\.(?P<ext>jpg|jpeg|png|webp|tiff)$",
);

/// 許可する画像拡張子
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "tiff"];

lazy_static::lazy_static! {
    static ref STRICT_PATTERN: Regex = Regex::new(STRICT_PATTERN_STR).unwrap();
    // DETAIL 部分だけを緩めた骨格パターン（却下理由の分類用）
    static ref SHAPE_PATTERN: Regex = Regex::new(concat!(
        r"^(?P<file_ID>[0-9]{4})_",
        r"(?P<detail>[^_]+)_",
        r"(?P<viewtype>[A-Z]{3})",
        r"(?:_(?P<date>[0-9]{8}))?",
        r"\.(?P<ext>jpg|jpeg|png|webp|tiff)$",
    )).unwrap();
    static ref DETAIL_CHARSET: Regex =
        Regex::new(r"^[A-Z0-9À-ÖØ-Ý]+(?:-[A-Z0-9À-ÖØ-Ý]+)*$").unwrap();
}

/// 文法に一致したファイル名の内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub file_id: FileId,
    /// 4桁ゼロ埋めのまま保持
    pub file_id_str: String,
    pub detail: String,
    pub view_type: ViewType,
    /// `YYYY-MM-DD`、日付なしは空文字
    pub date: String,
    pub ext: String,
}

/// 却下理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    NoRegexMatch,
    IllegalDetailCharset,
    UnknownViewType,
}

impl Rejection {
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::NoRegexMatch => "no regex match",
            Rejection::IllegalDetailCharset => "illegal detail charset",
            Rejection::UnknownViewType => "unknown viewtype",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// ファイル名（パスを含まない）を検証する
///
/// 判定順: 骨格一致 → DETAIL文字種 → 撮影種別コード → 厳格パターン。
/// 受理される集合は [`STRICT_PATTERN_STR`] と撮影種別の列挙に一致する。
pub fn parse_filename(file_name: &str) -> Result<ParsedName, Rejection> {
    let caps = SHAPE_PATTERN
        .captures(file_name)
        .ok_or(Rejection::NoRegexMatch)?;

    let detail = &caps["detail"];
    if !DETAIL_CHARSET.is_match(detail) {
        return Err(Rejection::IllegalDetailCharset);
    }

    let view_type = ViewType::from_code(&caps["viewtype"]).ok_or(Rejection::UnknownViewType)?;

    // 最終判定は厳格パターンで行い、値もそちらから取り出す
    let caps = STRICT_PATTERN
        .captures(file_name)
        .ok_or(Rejection::NoRegexMatch)?;

    let file_id_str = caps["file_ID"].to_string();
    // 4桁の ASCII 数字なので必ず成功する
    let file_id = FileId(file_id_str.parse().map_err(|_| Rejection::NoRegexMatch)?);

    let date = caps
        .name("date")
        .map(|m| normalize_date(m.as_str()))
        .unwrap_or_default();

    Ok(ParsedName {
        file_id,
        file_id_str,
        detail: caps["detail"].to_string(),
        view_type,
        date,
        ext: caps["ext"].to_lowercase(),
    })
}

/// 拡張子が画像か（大文字小文字を区別しない）
///
/// 文法に一致しない画像は「未解析」として一覧に残し、
/// 画像以外のファイルは黙って無視するための判定。
pub fn has_image_extension(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => IMAGE_EXTENSIONS
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext)),
        _ => false,
    }
}

/// `YYYYMMDD` → `YYYY-MM-DD`
fn normalize_date(raw: &str) -> String {
    format!("{}-{}-{}", &raw[0..4], &raw[4..6], &raw[6..8])
}
