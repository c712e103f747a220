use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("フォルダではありません: {0}")]
    NotADirectory(String),

    #[error("出力先がファイルではありません: {0}")]
    OutputBlocked(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ManifestError>;
