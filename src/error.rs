//! # 统一错误处理模块
//!
//! 定义 lucene-objc 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 错误分类
//! - 环境缺失: 找不到 j2objc 可执行文件（运行前即失败）
//! - 翻译失败: j2objc 返回非零退出码（中止整个运行）
//! - I/O 与配置错误
//!
//! 输出文件缺失不是错误，由 `patch/` 作为 `PatchOutcome::Missing` 报告。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// 找不到翻译器时的退出码
///
/// 沿用 shell 的 "command not found" 约定。注意 j2objc 自带的包装脚本在找不到
/// `java` 时同样以 127 退出，此时会作为 `TranslationFailed { code: 127 }` 原样
/// 传出，两者从退出码上无法区分，需看 stderr 上的提示。超过 255 的值在 POSIX
/// 上会被截断，没有可移植的专用退出码可选，因此保留 127。
pub const EXIT_TRANSLATOR_NOT_FOUND: i32 = 127;

/// lucene-objc 统一错误类型
#[derive(Error, Debug)]
pub enum LuceneObjcError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 翻译器错误
    // ─────────────────────────────────────────────────────────────
    #[error(
        "j2objc not found at '{path}'. Please execute the following script to fetch and setup the latest version of j2objc:\n$> ./setup-j2objc.sh"
    )]
    TranslatorNotFound { path: String },

    #[error("Failed to launch translator '{path}'")]
    TranslatorLaunch {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Translator exited with error code: {code}")]
    TranslationFailed { code: i32 },

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid search path entry: {0}")]
    InvalidSearchPath(String),

    #[error("Invalid patch rule pattern '{pattern}': {reason}")]
    InvalidPatchRule { pattern: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl LuceneObjcError {
    /// 映射到进程退出码
    ///
    /// 翻译失败时原样传递翻译器自身的退出码。
    pub fn exit_code(&self) -> i32 {
        match self {
            LuceneObjcError::TranslatorNotFound { .. } => EXIT_TRANSLATOR_NOT_FOUND,
            LuceneObjcError::TranslationFailed { code } => *code,
            _ => 1,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, LuceneObjcError>;
