//! # 构建配置
//!
//! 一次运行所需的全部输入：源码根目录、输出目录、翻译器路径与选项、
//! 排除模式、补丁规则表和每次必修补的文件。由命令行参数与
//! `rules/` 中的固定规则表组合而成，在构造时交给 `Orchestrator`。
//!
//! ## 依赖关系
//! - 被 `orchestrator.rs` 和 `commands/` 使用
//! - 使用 `rules/` 的默认值

use crate::patch::PatchRule;
use crate::rules;

use std::path::PathBuf;

/// 构建配置
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// 按顺序处理的源码根目录
    pub source_roots: Vec<PathBuf>,
    /// 只参与 classpath、不遍历的额外条目
    pub extra_paths: Vec<PathBuf>,
    /// 输出根目录
    pub dest: PathBuf,
    /// j2objc 可执行文件
    pub translator: PathBuf,
    /// 翻译器固定选项
    pub translator_options: Vec<String>,
    /// 排除模式
    pub excludes: Vec<String>,
    /// 补丁规则表
    pub patch_rules: &'static [PatchRule],
    /// 禁用标记
    pub disable_suffix: String,
    /// 每次运行结束时修补的文件（相对于输出目录）
    pub always_patch: Vec<PathBuf>,
    pub source_extension: String,
    pub target_extension: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            source_roots: to_paths(rules::DEFAULT_SOURCE_ROOTS),
            extra_paths: to_paths(rules::DEFAULT_EXTRA_PATHS),
            dest: PathBuf::from(rules::DEFAULT_DEST),
            translator: PathBuf::from(rules::DEFAULT_TRANSLATOR),
            translator_options: rules::TRANSLATOR_OPTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            excludes: rules::DEFAULT_EXCLUDES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            patch_rules: rules::PATCH_RULES,
            disable_suffix: rules::DISABLE_SUFFIX.to_string(),
            always_patch: to_paths(rules::ALWAYS_PATCH_FILES),
            source_extension: rules::SOURCE_EXTENSION.to_string(),
            target_extension: rules::TARGET_EXTENSION.to_string(),
        }
    }
}

impl BuildConfig {
    /// 翻译器使用的完整 classpath：源码根目录在前，额外条目在后
    pub fn search_path(&self) -> Vec<PathBuf> {
        self.source_roots
            .iter()
            .chain(self.extra_paths.iter())
            .cloned()
            .collect()
    }

    /// 每次必修补文件的完整路径
    pub fn always_patch_paths(&self) -> Vec<PathBuf> {
        self.always_patch.iter().map(|p| self.dest.join(p)).collect()
    }
}

fn to_paths(items: &[&str]) -> Vec<PathBuf> {
    items.iter().map(PathBuf::from).collect()
}
