//! # 数据模型模块
//!
//! 定义构建配置、翻译单元和运行统计。
//!
//! ## 依赖关系
//! - 被 `batch/`、`orchestrator.rs` 和 `commands/` 使用
//! - 子模块: config, unit

pub mod config;
pub mod unit;

pub use config::BuildConfig;
pub use unit::{RootReport, RunSummary, TranslationUnit};
