//! Evidence Manifest Common Library
//!
//! 命名規約（ファイル名文法）・分類表・マニフェストのレコード型。
//! ファイルI/Oを含まない純粋なロジックのみを置く。

pub mod error;
pub mod file_id;
pub mod grammar;
pub mod taxonomy;
pub mod types;

pub use error::{Error, Result};
pub use file_id::FileId;
pub use grammar::{has_image_extension, parse_filename, ParsedName, Rejection, STRICT_PATTERN_STR};
pub use taxonomy::{category_name, zone_name, ViewType, UNKNOWN};
pub use types::{
    parse_manifest_json, HashFailure, ImageMeta, ManifestRecord, ManifestReport, Orientation,
    ParsedRecord, RejectionCounts, Validations,
};
