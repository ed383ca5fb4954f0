//! # 批处理模块
//!
//! 增量构建的各个环节：发现输入、判断过期、批量调用翻译器。
//!
//! ## 依赖关系
//! - 被 `orchestrator.rs` 和 `commands/plan.rs` 使用
//! - 子模块: matcher, staleness, collector, invoker

pub mod collector;
pub mod invoker;
pub mod matcher;
pub mod staleness;

pub use collector::SourceCollector;
pub use invoker::BatchInvoker;
pub use matcher::PathMatcher;
