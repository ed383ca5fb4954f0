//! # build 命令实现
//!
//! 运行完整的增量构建并汇报统计。
//!
//! ## 依赖关系
//! - 使用 `cli/build.rs` 定义的参数
//! - 使用 `orchestrator.rs`, `utils/output.rs`

use crate::cli::build::BuildArgs;
use crate::error::Result;
use crate::orchestrator::Orchestrator;
use crate::utils::output;

/// 执行 build 命令
pub fn execute(args: BuildArgs) -> Result<()> {
    output::print_header("Translating Java to Objective-C");

    let config = super::build_config(&args.layout);
    let orchestrator = Orchestrator::new(config)?;
    let summary = orchestrator.run()?;

    output::print_separator();
    output::print_done(&format!(
        "{} files compiled into Objective-C including {} post processed files.",
        summary.translated, summary.patched
    ));
    output::print_info(&format!(
        "{} roots processed, {} files excluded, {} files up to date",
        summary.roots, summary.excluded, summary.fresh
    ));

    Ok(())
}
