//! バイナリ経由のコマンドテスト
//!
//! HOME を一時ディレクトリに向けて設定ファイルの状態を制御する。

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_evidence-manifest"))
        .args(args)
        .env("HOME", home)
        .output()
        .expect("実行失敗")
}

fn write_broken_config(home: &Path) {
    let dir = home.join(".config").join("evidence-manifest");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.json"), "{ broken").unwrap();
}

/// 設定ファイルが壊れていても validate はディスク設定を読まずに動く
#[test]
fn test_validate_ignores_broken_config() {
    let home = tempdir().unwrap();
    write_broken_config(home.path());

    let output = run(home.path(), &["validate", "0001_SDB_GEN_20250818.jpg"]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("0001_SDB_GEN_20250818.jpg"));
}

/// 規約外の名前があれば validate は失敗終了する
#[test]
fn test_validate_rejected_name_fails() {
    let home = tempdir().unwrap();

    let output = run(home.path(), &["validate", "0001_SDB_GEN.jpg", "0001_SDB_XXX.jpg"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("unknown viewtype"));
}

/// scan は設定を使うので、壊れた設定ファイルはエラーになり何も書かない
#[test]
fn test_scan_reports_broken_config() {
    let home = tempdir().unwrap();
    write_broken_config(home.path());
    let root = tempdir().unwrap();
    let out = tempdir().unwrap();

    let output = run(
        home.path(),
        &[
            "scan",
            root.path().to_str().unwrap(),
            "-o",
            out.path().to_str().unwrap(),
            "--no-progress",
        ],
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("JSON解析エラー"));
    assert!(!out.path().join("manifest_images.json").exists());
}

/// 走査ルートが無ければ失敗終了する
#[test]
fn test_scan_missing_root_fails() {
    let home = tempdir().unwrap();
    let out = tempdir().unwrap();
    let missing = home.path().join("nonexistent");

    let output = run(
        home.path(),
        &[
            "scan",
            missing.to_str().unwrap(),
            "-o",
            out.path().to_str().unwrap(),
            "--no-progress",
        ],
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("フォルダが見つかりません"));
    assert!(!out.path().join("manifest_report.json").exists());
}

/// 設定が無ければ config は既定値を表示する
#[test]
fn test_config_show_defaults() {
    let home = tempdir().unwrap();

    let output = run(home.path(), &["config", "--show"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("1048576"));
}
