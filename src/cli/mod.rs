//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `build`: 增量翻译并修补输出
//! - `plan`: 只列出过期文件，不调用翻译器
//! - `patch`: 对指定文件执行补丁规则
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: build, plan, patch

pub mod build;
pub mod patch;
pub mod plan;

use clap::{Parser, Subcommand};

/// lucene-objc - Lucene 的 j2objc 增量构建工具
#[derive(Parser)]
#[command(name = "lucene-objc")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Incrementally translate Lucene to Objective-C with j2objc and patch the output", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Translate stale Java sources and post-process the generated Objective-C
    Build(build::BuildArgs),

    /// List the Java sources that the next build would translate
    Plan(plan::PlanArgs),

    /// Apply the post-processing rules to specific generated files
    Patch(patch::PatchArgs),
}
