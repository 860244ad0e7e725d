//! CLIモジュール

use crate::config::{CliArgs, Config};
use crate::error::CommandError;
use crate::progress::{format_amount, Progress};
use crate::prompt::{Confirmer, TerminalConfirmer};
use crate::store::TaskStore;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

/// 年間10,000回の目標に向けた活動記録ツール
#[derive(Parser, Debug)]
#[command(name = "tenthousand")]
#[command(about = "年間10,000回の目標に向けた活動記録ツール", long_about = None)]
pub struct Cli {
    /// ストアファイルのパス（デフォルト: ~/.config/tenthousand/config.toml）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// サブコマンド
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// タスクの累計に加算
    Add {
        /// 加算する回数・分数
        #[arg(value_parser = parse_amount)]
        amount: f64,

        /// タスク名
        #[arg(value_parser = parse_task_name)]
        task: String,

        /// 確認なしでタスクを作成（既存タスクはリセットしない）
        #[arg(long)]
        init_task: bool,
    },
    /// タスクの進捗を表示
    Progress {
        /// タスク名
        #[arg(value_parser = parse_task_name)]
        task: String,

        /// 基準日（YYYY-MM-DD形式、デフォルトは今日）
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
}

/// コマンドの実行結果
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// 加算した
    Added {
        task: String,
        amount: f64,
        total: f64,
        created: bool,
    },
    /// タスク作成を断られた
    Declined { task: String },
    /// 進捗
    Progress { task: String, progress: Progress },
    /// タスクが存在しない
    TaskNotFound { task: String },
}

impl Outcome {
    /// 結果を出力
    pub fn print(&self) {
        match self {
            Outcome::Added {
                task,
                amount,
                total,
                created,
            } => {
                if *created {
                    println!("タスク '{}' を作成しました", task);
                }
                println!(
                    "{}: +{} (累計 {})",
                    task,
                    format_amount(*amount),
                    format_amount(*total)
                );
            }
            Outcome::Declined { task } => {
                eprintln!("中止しました（タスク '{}' は作成されていません）", task);
            }
            Outcome::Progress { task, progress } => progress.print(task),
            Outcome::TaskNotFound { task } => {
                println!("タスク '{}' はありません", task);
            }
        }
    }
}

/// 数量をパース（0以上の有限な数値）
fn parse_amount(s: &str) -> Result<f64, CommandError> {
    let amount: f64 = s
        .trim()
        .parse()
        .map_err(|_| CommandError::InvalidAmount(s.to_string()))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(CommandError::InvalidAmount(s.to_string()));
    }
    Ok(amount)
}

/// タスク名をパース（空白のみは不可）
fn parse_task_name(s: &str) -> Result<String, CommandError> {
    let name = s.trim();
    if name.is_empty() {
        return Err(CommandError::EmptyTaskName);
    }
    Ok(name.to_string())
}

/// 日付をパース
fn parse_date(s: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CommandError::InvalidDate(s.to_string()))
}

/// コマンドを実行
pub fn execute(
    cli: Cli,
    confirmer: &mut dyn Confirmer,
    today: NaiveDate,
) -> Result<Outcome, CommandError> {
    let config = Config::load(&CliArgs { config: cli.config })?;
    debug!("ストアファイル: {}", config.store_path.display());

    match cli.command {
        Commands::Add {
            amount,
            task,
            init_task,
        } => {
            let mut store = TaskStore::load(&config.store_path)?;

            let mut created = false;
            if !store.contains(&task) {
                if !init_task {
                    let prompt = format!("タスク '{}' は存在しません。作成しますか？", task);
                    let accepted = confirmer
                        .confirm(&prompt)
                        .map_err(CommandError::PromptError)?;
                    if !accepted {
                        info!("タスク作成が中止されました: {}", task);
                        return Ok(Outcome::Declined { task });
                    }
                }
                created = store.init_task(&task);
            }

            let total = store.add(&task, amount)?;
            store.save()?;

            Ok(Outcome::Added {
                task,
                amount,
                total,
                created,
            })
        }
        Commands::Progress { task, date } => {
            let store = TaskStore::load(&config.store_path)?;
            let Some(total) = store.total(&task) else {
                return Ok(Outcome::TaskNotFound { task });
            };

            let progress = Progress::compute(total, date.unwrap_or(today));
            Ok(Outcome::Progress { task, progress })
        }
    }
}

/// CLIエントリポイント
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let today = Local::now().date_naive();

    let outcome = execute(cli, &mut TerminalConfirmer, today)?;
    outcome.print();

    Ok(())
}
