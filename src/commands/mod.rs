//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `orchestrator.rs`, `utils/`
//! - 子模块: build, plan, patch

pub mod build;
pub mod patch;
pub mod plan;

use crate::cli::build::LayoutArgs;
use crate::cli::Commands;
use crate::error::Result;
use crate::models::BuildConfig;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Build(args) => build::execute(args),
        Commands::Plan(args) => plan::execute(args),
        Commands::Patch(args) => patch::execute(args),
    }
}

/// 由命令行参数与内置规则表组合出构建配置
pub fn build_config(layout: &LayoutArgs) -> BuildConfig {
    let mut config = BuildConfig {
        translator: layout.translator.clone(),
        dest: layout.dest.clone(),
        ..BuildConfig::default()
    };

    if !layout.source_roots.is_empty() {
        config.source_roots = layout.source_roots.clone();
    }
    if !layout.extra_paths.is_empty() {
        config.extra_paths = layout.extra_paths.clone();
    }
    if layout.no_default_excludes {
        config.excludes.clear();
    }
    config.excludes.extend(layout.excludes.iter().cloned());

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules;
    use std::path::PathBuf;

    fn layout() -> LayoutArgs {
        LayoutArgs {
            translator: PathBuf::from(rules::DEFAULT_TRANSLATOR),
            dest: PathBuf::from(rules::DEFAULT_DEST),
            source_roots: vec![],
            extra_paths: vec![],
            excludes: vec![],
            no_default_excludes: false,
        }
    }

    #[test]
    fn test_defaults_kept() {
        let config = build_config(&layout());
        assert_eq!(config.source_roots.len(), rules::DEFAULT_SOURCE_ROOTS.len());
        assert_eq!(config.excludes.len(), rules::DEFAULT_EXCLUDES.len());
        assert_eq!(config.extra_paths.len(), rules::DEFAULT_EXTRA_PATHS.len());
    }

    #[test]
    fn test_overrides() {
        let args = LayoutArgs {
            source_roots: vec![PathBuf::from("./core/src/java")],
            excludes: vec!["./core/src/java/x/*".to_string()],
            no_default_excludes: true,
            ..layout()
        };
        let config = build_config(&args);
        assert_eq!(config.source_roots, vec![PathBuf::from("./core/src/java")]);
        assert_eq!(config.excludes, vec!["./core/src/java/x/*".to_string()]);
        assert_eq!(config.extra_paths.len(), rules::DEFAULT_EXTRA_PATHS.len());
    }

    #[test]
    fn test_extra_excludes_are_added() {
        let args = LayoutArgs {
            excludes: vec!["./x/*".to_string()],
            ..layout()
        };
        let config = build_config(&args);
        assert_eq!(config.excludes.len(), rules::DEFAULT_EXCLUDES.len() + 1);
        assert_eq!(config.excludes.last().map(String::as_str), Some("./x/*"));
    }
}
