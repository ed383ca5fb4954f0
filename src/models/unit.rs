//! # 翻译单元与运行统计
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs`、`orchestrator.rs` 和 `commands/` 使用

use crate::batch::staleness::Staleness;

use std::path::{Path, PathBuf};

/// 一个待翻译的输入文件及其输出路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationUnit {
    pub input: PathBuf,
    pub output: PathBuf,
    pub staleness: Staleness,
}

impl TranslationUnit {
    /// 推导输出路径：源码根目录前缀替换为输出目录，扩展名替换为目标扩展名
    ///
    /// 输入不在 `root` 之下时返回 `None`。
    pub fn output_path(input: &Path, root: &Path, dest: &Path, extension: &str) -> Option<PathBuf> {
        let relative = input.strip_prefix(root).ok()?;
        if relative.as_os_str().is_empty() {
            // root 本身就是文件
            let name = input.file_name()?;
            return Some(dest.join(name).with_extension(extension));
        }
        Some(dest.join(relative).with_extension(extension))
    }
}

/// 单个源码根目录的处理结果
#[derive(Debug, Clone, Default)]
pub struct RootReport {
    pub root: PathBuf,
    /// 符合扩展名的文件数
    pub eligible: usize,
    /// 被排除模式过滤的文件数
    pub excluded: usize,
    /// 已是最新的文件数
    pub fresh: usize,
    /// 需要翻译的单元
    pub units: Vec<TranslationUnit>,
}

impl RootReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        RootReport {
            root: root.into(),
            ..Default::default()
        }
    }
}

/// 一次运行的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// 处理过的源码根目录数
    pub roots: usize,
    /// 提交给翻译器的文件数
    pub translated: usize,
    /// 内容被补丁修改的输出文件数
    pub patched: usize,
    pub excluded: usize,
    pub fresh: usize,
}
