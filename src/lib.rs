//! 証拠写真マニフェスト生成
//!
//! ディレクトリを再帰的に走査し、厳格なファイル名規約に一致する画像から
//! マニフェスト・取り込み用マニフェスト・走査レポートを生成する。

pub mod cli;
pub mod config;
pub mod error;
pub mod manifest;
pub mod scanner;

pub use evidence_manifest_common as common;
