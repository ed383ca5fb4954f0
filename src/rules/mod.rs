//! # 规则表模块
//!
//! 随工具版本固定的配置数据：默认源码根目录、额外 classpath、
//! 排除模式与补丁规则。
//!
//! ## 依赖关系
//! - 被 `models/config.rs` 使用
//! - 子模块: exclusions, patches

pub mod exclusions;
pub mod patches;

pub use exclusions::{DEFAULT_EXCLUDES, DEFAULT_EXTRA_PATHS, DEFAULT_SOURCE_ROOTS};
pub use patches::{ALWAYS_PATCH_FILES, DISABLE_SUFFIX, PATCH_RULES};

/// 默认 j2objc 路径
pub const DEFAULT_TRANSLATOR: &str = "./j2objc/j2objc";

/// 默认输出目录
pub const DEFAULT_DEST: &str = "./build/objc";

/// 输入文件扩展名
pub const SOURCE_EXTENSION: &str = "java";

/// 输出文件扩展名
pub const TARGET_EXTENSION: &str = "m";

/// 传递给 j2objc 的固定选项
pub const TRANSLATOR_OPTIONS: &[&str] = &["--swift-friendly", "--nullability", "--doc-comments"];
