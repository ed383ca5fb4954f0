//! # 批量翻译调用
//!
//! 以一次子进程调用把整个过期文件列表交给 j2objc，分摊其启动和符号解析开销。
//!
//! ## 命令行
//! ```text
//! <translator> -d <dest> -classpath <p1:p2:...> <options...> <inputs...>
//! ```
//!
//! ## 依赖关系
//! - 被 `orchestrator.rs` 调用
//! - 翻译器的 stdout/stderr 直接继承给用户

use crate::error::{LuceneObjcError, Result};

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

/// 被信号终止、没有退出码时使用的退出码
const SIGNALED_EXIT_CODE: i32 = 1;

/// 批量翻译调用器
#[derive(Debug, Clone)]
pub struct BatchInvoker {
    translator: PathBuf,
    dest: PathBuf,
    classpath: OsString,
    options: Vec<String>,
}

impl BatchInvoker {
    /// 创建调用器，classpath 以系统路径分隔符连接
    pub fn new(
        translator: impl Into<PathBuf>,
        dest: impl Into<PathBuf>,
        search_path: &[PathBuf],
        options: &[String],
    ) -> Result<Self> {
        let classpath = std::env::join_paths(search_path)
            .map_err(|e| LuceneObjcError::InvalidSearchPath(e.to_string()))?;
        Ok(Self {
            translator: translator.into(),
            dest: dest.into(),
            classpath,
            options: options.to_vec(),
        })
    }

    /// 检查翻译器是否存在
    pub fn ensure_available(&self) -> Result<()> {
        if self.translator.exists() {
            Ok(())
        } else {
            Err(LuceneObjcError::TranslatorNotFound {
                path: self.translator.display().to_string(),
            })
        }
    }

    /// 组装完整命令
    pub fn command(&self, inputs: &[&Path]) -> Command {
        let mut cmd = Command::new(&self.translator);
        cmd.arg("-d")
            .arg(&self.dest)
            .arg("-classpath")
            .arg(&self.classpath)
            .args(&self.options)
            .args(inputs);
        cmd
    }

    /// 调用翻译器，返回其退出码
    ///
    /// 非零退出码由调用方决定如何处理。
    pub fn invoke(&self, inputs: &[&Path]) -> Result<i32> {
        let status = self.command(inputs).status().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                LuceneObjcError::TranslatorNotFound {
                    path: self.translator.display().to_string(),
                }
            } else {
                LuceneObjcError::TranslatorLaunch {
                    path: self.translator.display().to_string(),
                    source: e,
                }
            }
        })?;
        Ok(status.code().unwrap_or(SIGNALED_EXIT_CODE))
    }

    /// 调用翻译器，非零退出码转换为 `TranslationFailed`
    pub fn run(&self, inputs: &[&Path]) -> Result<()> {
        match self.invoke(inputs)? {
            0 => Ok(()),
            code => Err(LuceneObjcError::TranslationFailed { code }),
        }
    }
}
