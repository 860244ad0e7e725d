//! タスクストアモジュール
//!
//! タスク名 → 年間累計 の対応をTOMLファイルに保存する。
//! 履歴は持たず、累計値のみを保持する。

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// TOMLファイル用構造体（タスク名 → 累計）
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct TaskTotals(BTreeMap<String, f64>);

/// タスクストア
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: BTreeMap<String, f64>,
}

impl TaskStore {
    /// ストアを読み込む
    ///
    /// ファイルが存在しない場合は空のストアを返す（初回保存時に作成）
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let TaskTotals(tasks) = if path.exists() {
            let content = fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|source| StoreError::ParseError {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            debug!("ストアファイルがありません: {}", path.display());
            TaskTotals::default()
        };

        debug!("{}件のタスクを読み込みました", tasks.len());

        Ok(Self {
            path: path.to_path_buf(),
            tasks,
        })
    }

    /// ストアを保存
    ///
    /// 同じディレクトリに一時ファイルを書き出してから置き換えるため、
    /// 途中で失敗しても既存のファイルは壊れない
    pub fn save(&self) -> Result<(), StoreError> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string(&TaskTotals(self.tasks.clone()))?;

        let mut temp = NamedTempFile::new_in(parent)?;
        // 既存ファイルのパーミッションを引き継ぐ
        if let Ok(metadata) = fs::metadata(&self.path) {
            temp.as_file().set_permissions(metadata.permissions())?;
        }
        temp.write_all(content.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path)?;

        info!("ストアを保存しました: {}", self.path.display());
        Ok(())
    }

    /// タスクの累計を取得
    pub fn total(&self, task: &str) -> Option<f64> {
        self.tasks.get(task).copied()
    }

    /// タスクが存在するか
    pub fn contains(&self, task: &str) -> bool {
        self.tasks.contains_key(task)
    }

    /// タスクを作成（累計0）
    ///
    /// 既に存在する場合は何もしない。作成した場合はtrueを返す
    pub fn init_task(&mut self, task: &str) -> bool {
        if self.contains(task) {
            return false;
        }
        self.tasks.insert(task.to_string(), 0.0);
        info!("タスクを作成しました: {}", task);
        true
    }

    /// タスクの累計に加算し、新しい累計を返す
    ///
    /// 累計が有限値で表せなくなる場合はエラーとし、ストアは変更しない
    pub fn add(&mut self, task: &str, amount: f64) -> Result<f64, StoreError> {
        let total = self
            .tasks
            .get_mut(task)
            .ok_or_else(|| StoreError::TaskNotFound(task.to_string()))?;
        let new_total = *total + amount;
        if !new_total.is_finite() {
            return Err(StoreError::TotalOverflow(task.to_string()));
        }
        *total = new_total;
        Ok(new_total)
    }
}
