//! Rollcall - Classroom roll-call client
//!
//! 名簿の表示、出欠の記録、ロール履歴の確認

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use rollcall::adapter::config::Config;
use rollcall::driver::{Args, RollcallWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Create workflow with injected dependencies
    let mut workflow = RollcallWorkflow::new(config)?;

    workflow.execute(args.command).await
}
