//! # build 子命令 CLI 定义
//!
//! 增量翻译 Lucene 源码并修补生成的 Objective-C 代码。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - `LayoutArgs` 同时被 `cli/plan.rs` 使用
//! - 参数传递给 `commands/build.rs`

use crate::rules;

use clap::Args;
use std::path::PathBuf;

/// 源码与输出布局参数
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Path to the j2objc executable
    #[arg(long, env = "LUCENE_OBJC_TRANSLATOR", default_value = rules::DEFAULT_TRANSLATOR)]
    pub translator: PathBuf,

    /// Destination directory for generated Objective-C files
    #[arg(long, env = "LUCENE_OBJC_DEST", default_value = rules::DEFAULT_DEST)]
    pub dest: PathBuf,

    /// Java source root, in classpath order (repeatable; replaces the built-in Lucene roots)
    #[arg(long = "source-root", value_name = "DIR")]
    pub source_roots: Vec<PathBuf>,

    /// Extra classpath entry that is not translated (repeatable; replaces the built-in entries)
    #[arg(long = "extra-path", value_name = "PATH")]
    pub extra_paths: Vec<PathBuf>,

    /// Additional exclusion glob, matched against './<root>/...' paths (repeatable)
    #[arg(long = "exclude", value_name = "GLOB")]
    pub excludes: Vec<String>,

    /// Do not apply the built-in exclusion list
    #[arg(long, default_value_t = false)]
    pub no_default_excludes: bool,
}

/// build 子命令参数
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,
}
