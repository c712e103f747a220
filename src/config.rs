use crate::error::{ManifestError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ハッシュ計算の既定チャンクサイズ（1 MiB）
pub const DEFAULT_HASH_CHUNK_SIZE: usize = 1 << 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 出力先の既定値（未設定ならカレントディレクトリ）
    pub default_out_dir: Option<PathBuf>,
    pub hash_chunk_size: usize,
    /// 画像解析・ハッシュ計算を並列実行する
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_out_dir: None,
            hash_chunk_size: DEFAULT_HASH_CHUNK_SIZE,
            parallel: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ManifestError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("evidence-manifest").join("config.json"))
    }

    /// 出力先: 引数 > 設定ファイル > カレント
    pub fn resolve_out_dir(&self, cli_value: Option<PathBuf>) -> PathBuf {
        cli_value
            .or_else(|| self.default_out_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn set_hash_chunk_size(&mut self, size: usize) -> Result<()> {
        self.hash_chunk_size = size;
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.hash_chunk_size == 0 {
            return Err(ManifestError::Config(
                "hash_chunk_size は1以上を指定してください".into(),
            ));
        }
        Ok(())
    }
}
