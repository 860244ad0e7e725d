//! tenthousand - 年間10,000回の目標に向けた活動記録ツール

mod cli;
mod config;
mod error;
mod logging;
mod progress;
mod prompt;
mod store;

use anyhow::Result;

fn main() -> Result<()> {
    logging::init();
    cli::run()
}
