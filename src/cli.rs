use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "evidence-manifest")]
#[command(about = "証拠写真ファイル名の厳格検証・マニフェスト生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// フォルダを再帰的に走査してマニフェストを出力
    Scan {
        /// 走査するルートフォルダ
        #[arg(required = true)]
        root: PathBuf,

        /// 出力ディレクトリ（デフォルト: 設定値、未設定ならカレント）
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// 並列処理を無効化
        #[arg(long)]
        sequential: bool,

        /// 進捗バーを表示しない
        #[arg(long)]
        no_progress: bool,
    },

    /// ファイル名を命名規約で検証（ディスクは読まない）
    Validate {
        /// 検証するファイル名
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 出力ディレクトリの既定値を設定
        #[arg(long)]
        set_out_dir: Option<PathBuf>,

        /// ハッシュ計算のチャンクサイズ（バイト）を設定
        #[arg(long)]
        set_chunk_size: Option<usize>,

        /// 並列処理の既定値を設定 (true/false)
        #[arg(long)]
        set_parallel: Option<bool>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_scan() {
        let cli = Cli::parse_from(["evidence-manifest", "scan", "photos", "-o", "out", "--sequential"]);
        match cli.command {
            Commands::Scan { root, out_dir, sequential, no_progress } => {
                assert_eq!(root, PathBuf::from("photos"));
                assert_eq!(out_dir, Some(PathBuf::from("out")));
                assert!(sequential);
                assert!(!no_progress);
            }
            _ => panic!("scan として解釈されていない"),
        }
    }

    #[test]
    fn test_scan_requires_root() {
        assert!(Cli::try_parse_from(["evidence-manifest", "scan"]).is_err());
    }

    #[test]
    fn test_parse_validate_multiple_names() {
        let cli = Cli::parse_from([
            "evidence-manifest",
            "-v",
            "validate",
            "0001_SDB_GEN.jpg",
            "0002_WC_DET.png",
        ]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Validate { names } => assert_eq!(names.len(), 2),
            _ => panic!("validate として解釈されていない"),
        }
    }
}
