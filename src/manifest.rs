//! マニフェスト出力
//!
//! 走査結果1回分から次のファイルを生成する:
//! - `manifest_images.json`（全項目）
//! - `manifest_images_parsed.json`（取り込み用）
//! - `manifest_report.json`
//! - `unparsed_filenames.txt`（未解析がある場合のみ）

use crate::error::{ManifestError, Result};
use crate::scanner::ScanOutcome;
use evidence_manifest_common::{ManifestReport, ParsedRecord};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const MANIFEST_FILE_NAME: &str = "manifest_images.json";
pub const PARSED_FILE_NAME: &str = "manifest_images_parsed.json";
pub const REPORT_FILE_NAME: &str = "manifest_report.json";
pub const UNPARSED_FILE_NAME: &str = "unparsed_filenames.txt";

/// 出力先パス一式
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub manifest: PathBuf,
    pub parsed: PathBuf,
    pub report: PathBuf,
    pub unparsed: PathBuf,
}

impl OutputPaths {
    pub fn in_dir(out_dir: &Path) -> Self {
        Self {
            manifest: out_dir.join(MANIFEST_FILE_NAME),
            parsed: out_dir.join(PARSED_FILE_NAME),
            report: out_dir.join(REPORT_FILE_NAME),
            unparsed: out_dir.join(UNPARSED_FILE_NAME),
        }
    }
}

/// 書き出した結果
#[derive(Debug, Clone)]
pub struct WrittenOutputs {
    pub paths: OutputPaths,
    /// `unparsed_filenames.txt` を書いたか
    pub unparsed_written: bool,
}

/// 走査結果を出力ディレクトリへ書き出す
///
/// すべての内容をメモリ上で直列化し、同じディレクトリの一時ファイルへ書き終えてから
/// まとめて rename する。途中で失敗した場合は既存の出力に手を付けない。
/// 未解析が0件のときは前回の `unparsed_filenames.txt` を削除する。
pub fn write_outputs(
    outcome: &ScanOutcome,
    report: &ManifestReport,
    out_dir: &Path,
) -> Result<WrittenOutputs> {
    let manifest_json = serde_json::to_string_pretty(&outcome.records)?;

    let parsed: Vec<ParsedRecord> = outcome.records.iter().map(ParsedRecord::from).collect();
    let parsed_json = serde_json::to_string_pretty(&parsed)?;

    let report_json = serde_json::to_string_pretty(report)?;

    let unparsed_written = !outcome.unparsed.is_empty();
    let unparsed_text = outcome
        .unparsed
        .iter()
        .map(|u| u.rel_path.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    std::fs::create_dir_all(out_dir)?;
    let paths = OutputPaths::in_dir(out_dir);

    let mut targets = vec![
        (&paths.manifest, manifest_json),
        (&paths.parsed, parsed_json),
        (&paths.report, report_json),
    ];
    if unparsed_written {
        targets.push((&paths.unparsed, unparsed_text));
    }

    // rename 先がディレクトリだと途中で失敗するので先に確認する
    for (path, _) in &targets {
        if path.is_dir() {
            return Err(ManifestError::OutputBlocked(path.display().to_string()));
        }
    }
    if !unparsed_written && paths.unparsed.is_dir() {
        return Err(ManifestError::OutputBlocked(paths.unparsed.display().to_string()));
    }

    // 一時ファイルは失敗時に drop で消える
    let mut staged = Vec::with_capacity(targets.len());
    for (path, content) in targets {
        let mut tmp = NamedTempFile::new_in(out_dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        staged.push((tmp, path));
    }

    for (tmp, path) in staged {
        tmp.persist(path).map_err(|e| e.error)?;
    }

    if !unparsed_written && paths.unparsed.exists() {
        std::fs::remove_file(&paths.unparsed)?;
    }

    Ok(WrittenOutputs {
        paths,
        unparsed_written,
    })
}
