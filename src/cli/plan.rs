//! # plan 子命令 CLI 定义
//!
//! 列出下一次构建将要翻译的文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/plan.rs`

use super::build::LayoutArgs;

use clap::Args;
use std::path::PathBuf;

/// plan 子命令参数
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Write the stale file list to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Only print per-root counts
    #[arg(long, default_value_t = false)]
    pub summary: bool,
}
