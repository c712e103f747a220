mod exif;
mod hash;

pub use exif::image_meta;
pub use hash::sha256_file;

use crate::config::{Config, DEFAULT_HASH_CHUNK_SIZE};
use crate::error::{ManifestError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use evidence_manifest_common::grammar::{has_image_extension, parse_filename, ParsedName, Rejection};
use evidence_manifest_common::{
    HashFailure, ManifestRecord, ManifestReport, RejectionCounts, STRICT_PATTERN_STR,
};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 走査オプション
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// 画像解析・ハッシュ計算を rayon で並列実行する
    pub parallel: bool,
    pub hash_chunk_size: usize,
    pub show_progress: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            hash_chunk_size: DEFAULT_HASH_CHUNK_SIZE,
            show_progress: false,
        }
    }
}

impl ScanOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            parallel: config.parallel,
            hash_chunk_size: config.hash_chunk_size,
            show_progress: false,
        }
    }
}

/// 文法に一致しなかった画像ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unparsed {
    pub rel_path: String,
    pub rejection: Rejection,
}

/// 1回の走査結果
///
/// 3つの出力ファイルはすべてこの値から生成する。
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// 走査ルート（絶対パス）
    pub root: PathBuf,
    /// 走査した通常ファイルの総数
    pub total_seen: usize,
    pub records: Vec<ManifestRecord>,
    pub unparsed: Vec<Unparsed>,
    pub hash_failures: Vec<HashFailure>,
}

impl ScanOutcome {
    pub fn rejection_counts(&self) -> RejectionCounts {
        let mut counts = RejectionCounts::default();
        for u in &self.unparsed {
            counts.add(u.rejection);
        }
        counts
    }

    pub fn report(&self, timestamp: DateTime<Utc>) -> ManifestReport {
        let parsed = self.records.len();
        ManifestReport {
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            scanned_root: self.root.display().to_string(),
            total_seen: self.total_seen,
            parsed,
            ignored_non_conform: self.total_seen - parsed,
            unparsed_listed: self.unparsed.len(),
            pattern_strict: STRICT_PATTERN_STR.to_string(),
            rejections: self.rejection_counts(),
            hash_failures: self.hash_failures.clone(),
        }
    }
}

/// 文法に一致し、画像解析待ちのファイル
struct Candidate {
    path: PathBuf,
    rel_path: String,
    file_name: String,
    name: ParsedName,
}

/// ルート以下を再帰的に走査してマニフェストのレコードを集める
///
/// ルートが存在しない・読めない場合のみエラー。
/// ファイル単位の失敗（文法不一致・画像破損・ハッシュ失敗）は結果に記録して続行する。
pub fn scan_root(root: &Path, options: &ScanOptions) -> Result<ScanOutcome> {
    if !root.exists() {
        return Err(ManifestError::FolderNotFound(root.display().to_string()));
    }
    if !root.is_dir() {
        return Err(ManifestError::NotADirectory(root.display().to_string()));
    }
    // 読み取り権限の確認
    std::fs::read_dir(root)?;
    let root = root.canonicalize()?;

    let mut total_seen = 0;
    let mut candidates = Vec::new();
    let mut unparsed = Vec::new();

    // ファイル名順に走査（出力順を実行ごとに固定する）
    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                eprintln!("⚠ 読み取れないエントリをスキップ: {}", e);
                continue;
            }
        };

        // シンボリックリンク先が通常ファイルなら対象に含める
        if !entry.path().is_file() {
            continue;
        }
        total_seen += 1;

        let file_name = entry.file_name().to_string_lossy().to_string();
        let rel_path = relative_path(&root, entry.path());

        match parse_filename(&file_name) {
            Ok(name) => candidates.push(Candidate {
                path: entry.into_path(),
                rel_path,
                file_name,
                name,
            }),
            // 画像以外の拡張子は一覧に載せず無視
            Err(rejection) if has_image_extension(&file_name) => {
                unparsed.push(Unparsed { rel_path, rejection });
            }
            Err(_) => {}
        }
    }

    let progress = if options.show_progress {
        let pb = ProgressBar::new(candidates.len() as u64);
        pb.set_style(
            ProgressStyle::with_template("  {bar:40} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let inspect = |c: &Candidate| {
        let result = inspect_candidate(c, options.hash_chunk_size);
        progress.inc(1);
        result
    };

    // collect は入力順を保つので並列でも出力順は走査順のまま
    let inspected: Vec<std::result::Result<ManifestRecord, HashFailure>> = if options.parallel {
        candidates.par_iter().map(inspect).collect()
    } else {
        candidates.iter().map(inspect).collect()
    };
    progress.finish_and_clear();

    let mut records = Vec::with_capacity(inspected.len());
    let mut hash_failures = Vec::new();
    for item in inspected {
        match item {
            Ok(record) => records.push(record),
            Err(failure) => {
                eprintln!(
                    "⚠ ハッシュ計算に失敗したため除外: {} ({})",
                    failure.rel_path, failure.error
                );
                hash_failures.push(failure);
            }
        }
    }

    Ok(ScanOutcome {
        root,
        total_seen,
        records,
        unparsed,
        hash_failures,
    })
}

fn inspect_candidate(
    c: &Candidate,
    chunk_size: usize,
) -> std::result::Result<ManifestRecord, HashFailure> {
    let sha256 = sha256_file(&c.path, chunk_size).map_err(|e| HashFailure {
        rel_path: c.rel_path.clone(),
        error: e.to_string(),
    })?;
    let meta = image_meta(&c.path);

    Ok(ManifestRecord::build(
        c.rel_path.clone(),
        c.file_name.clone(),
        &c.name,
        sha256,
        meta,
    ))
}

/// ルートからの相対パス（OSに関係なく `/` 区切り）
fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
