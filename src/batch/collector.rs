//! # 翻译单元收集器
//!
//! 遍历一个源码根目录，得到需要重新翻译的文件列表。
//!
//! ## 功能
//! - 按扩展名筛选输入文件
//! - 排除模式过滤
//! - 推导输出路径并判断是否过期
//!
//! ## 依赖关系
//! - 被 `orchestrator.rs` 调用
//! - 使用 `batch/matcher.rs`, `batch/staleness.rs`
//! - 使用 `walkdir` 遍历目录

use super::matcher::PathMatcher;
use super::staleness;
use crate::error::Result;
use crate::models::{RootReport, TranslationUnit};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 翻译单元收集器
pub struct SourceCollector<'a> {
    /// 源码根目录
    root: PathBuf,
    /// 输出根目录
    dest: PathBuf,
    /// 排除模式
    matcher: &'a PathMatcher,
    source_extension: String,
    target_extension: String,
}

impl<'a> SourceCollector<'a> {
    /// 创建新的收集器（默认 .java -> .m）
    pub fn new(root: impl Into<PathBuf>, dest: impl Into<PathBuf>, matcher: &'a PathMatcher) -> Self {
        Self {
            root: root.into(),
            dest: dest.into(),
            matcher,
            source_extension: crate::rules::SOURCE_EXTENSION.to_string(),
            target_extension: crate::rules::TARGET_EXTENSION.to_string(),
        }
    }

    /// 设置输入/输出扩展名
    pub fn extensions(mut self, source: &str, target: &str) -> Self {
        self.source_extension = source.to_string();
        self.target_extension = target.to_string();
        self
    }

    /// 收集过期的翻译单元
    ///
    /// 不存在的根目录（如尚未构建的 class 目录）不产生任何单元。
    /// 指向文件的符号链接按普通文件处理，指向目录的符号链接不进入。
    pub fn collect(&self) -> Result<RootReport> {
        let mut report = RootReport::new(&self.root);

        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_type().is_file() || (e.path_is_symlink() && e.path().is_file())
            });

        for entry in walker {
            let input = entry.path();
            if !self.is_eligible(input) {
                continue;
            }
            report.eligible += 1;

            if self.matcher.matches(input) {
                report.excluded += 1;
                continue;
            }

            let output = match TranslationUnit::output_path(
                input,
                &self.root,
                &self.dest,
                &self.target_extension,
            ) {
                Some(output) => output,
                None => continue,
            };

            let staleness = staleness::check(input, &output)?;
            if !staleness.is_stale() {
                report.fresh += 1;
                continue;
            }

            report.units.push(TranslationUnit {
                input: input.to_path_buf(),
                output,
                staleness,
            });
        }

        Ok(report)
    }

    fn is_eligible(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e == self.source_extension)
            .unwrap_or(false)
    }
}
