//! エラー型定義モジュール

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 設定エラー
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("ホームディレクトリが見つかりません")]
    HomeDirNotFound,
}

/// ストアエラー
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IOエラー: {0}")]
    IoError(#[from] io::Error),

    #[error("TOML解析エラー ({path}): {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("TOML書き込みエラー: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("ファイル置き換え失敗: {0}")]
    PersistError(#[from] tempfile::PersistError),

    #[error("タスクが存在しません: {0}")]
    TaskNotFound(String),

    #[error("累計が上限を超えます: {0}")]
    TotalOverflow(String),
}

/// コマンドエラー
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("ストアエラー: {0}")]
    StoreError(#[from] StoreError),

    #[error("設定エラー: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("タスク名が空です")]
    EmptyTaskName,

    #[error("無効な数量: {0}")]
    InvalidAmount(String),

    #[error("無効な日付: {0}")]
    InvalidDate(String),

    #[error("確認入力の読み取り失敗: {0}")]
    PromptError(io::Error),
}
