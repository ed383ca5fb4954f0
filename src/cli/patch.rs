//! # patch 子命令 CLI 定义
//!
//! 对指定的生成文件执行补丁规则。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/patch.rs`

use clap::Args;
use std::path::PathBuf;

/// patch 子命令参数
#[derive(Args, Debug)]
pub struct PatchArgs {
    /// Generated Objective-C files to post-process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Report which files would change without writing them
    #[arg(long, default_value_t = false)]
    pub check: bool,
}
