//! # lucene-objc - Lucene 的 j2objc 增量构建工具
//!
//! 驱动 j2objc 把 Lucene 的 Java 源码翻译为 Objective-C，只重新翻译过期的文件，
//! 然后对输出应用一组固定的文本补丁，修正 j2objc 已知的翻译缺陷。
//!
//! ## 子命令
//! - `build` - 增量翻译并修补输出
//! - `plan`  - 列出下一次构建会翻译的文件
//! - `patch` - 对指定文件执行补丁规则
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/          (命令行参数定义)
//!   ├── commands/     (命令执行逻辑)
//!   │     └── orchestrator.rs (增量构建编排)
//!   │           ├── batch/   (发现、过期判断、批量调用)
//!   │           └── patch/   (补丁引擎)
//!   ├── rules/        (排除模式与补丁规则表)
//!   ├── models/       (配置与数据模型)
//!   ├── utils/        (输出与进度条)
//!   └── error.rs      (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod orchestrator;
mod patch;
mod rules;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(e.exit_code());
    }
}
