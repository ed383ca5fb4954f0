//! # 过期判断
//!
//! 输出文件不存在，或其修改时间严格早于输入文件时，需要重新翻译。
//! 时间相等视为已是最新。
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs` 使用
//! - 无外部模块依赖

use crate::error::{LuceneObjcError, Result};

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// 过期原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staleness {
    /// 输出文件不存在
    Missing,
    /// 输出早于输入
    Outdated,
    /// 输出是最新的
    Fresh,
}

impl Staleness {
    pub fn is_stale(self) -> bool {
        self != Staleness::Fresh
    }
}

impl std::fmt::Display for Staleness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Staleness::Missing => write!(f, "missing"),
            Staleness::Outdated => write!(f, "outdated"),
            Staleness::Fresh => write!(f, "fresh"),
        }
    }
}

/// 比较输入与输出的修改时间
pub fn check(input: &Path, output: &Path) -> Result<Staleness> {
    let output_mtime = match fs::metadata(output) {
        Ok(meta) => meta.modified(),
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Staleness::Missing),
        Err(e) => Err(e),
    }
    .map_err(|e| LuceneObjcError::FileReadError {
        path: output.display().to_string(),
        source: e,
    })?;

    let input_mtime = fs::metadata(input)
        .and_then(|m| m.modified())
        .map_err(|e| LuceneObjcError::FileReadError {
            path: input.display().to_string(),
            source: e,
        })?;

    if output_mtime >= input_mtime {
        Ok(Staleness::Fresh)
    } else {
        Ok(Staleness::Outdated)
    }
}
