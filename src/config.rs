//! 設定モジュール

use crate::error::ConfigError;
use std::path::PathBuf;

/// アプリケーション名（デフォルトパスに使用）
pub const APP_NAME: &str = "tenthousand";

/// アプリケーション設定
#[derive(Debug, Clone)]
pub struct Config {
    /// タスク合計を保存するファイルパス
    pub store_path: PathBuf,
}

/// CLI引数
#[derive(Debug, Default)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
}

impl Config {
    /// 設定を読み込む
    ///
    /// 優先順位: CLI引数 > デフォルト値
    pub fn load(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let store_path = match &cli_args.config {
            Some(path) => path.clone(),
            None => default_store_path()?,
        };

        Ok(Self { store_path })
    }
}

/// デフォルトのストアパス（~/.config/tenthousand/config.toml）
pub fn default_store_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
    Ok(home.join(".config").join(APP_NAME).join("config.toml"))
}
