//! # patch 命令实现
//!
//! 对指定文件执行补丁规则，用于手工修复输出树。
//!
//! ## 依赖关系
//! - 使用 `cli/patch.rs` 定义的参数
//! - 使用 `patch/`, `rules/`, `utils/output.rs`

use crate::cli::patch::PatchArgs;
use crate::error::Result;
use crate::patch::{PatchEngine, PatchOutcome};
use crate::rules::{DISABLE_SUFFIX, PATCH_RULES};
use crate::utils::output;

/// 执行 patch 命令
pub fn execute(args: PatchArgs) -> Result<()> {
    output::print_header(if args.check {
        "Checking Objective-C output"
    } else {
        "Post processing Objective-C output"
    });

    let engine = PatchEngine::new(PATCH_RULES, DISABLE_SUFFIX)?;
    let mut changed = 0;

    for path in &args.files {
        let outcome = if args.check {
            engine.check(path)?
        } else {
            engine.patch(path)?
        };

        match outcome {
            PatchOutcome::Changed if args.check => {
                output::print_warning(&format!("Needs post processing: {}", path.display()));
            }
            PatchOutcome::Changed => {
                output::print_success(&format!("Post processed: {}", path.display()));
            }
            PatchOutcome::Unchanged => {
                output::print_skip(&format!("Already clean: {}", path.display()));
            }
            PatchOutcome::Missing => {
                output::print_warning(&format!("File does not exist at path: {}", path.display()));
            }
        }

        if outcome.changed() {
            changed += 1;
        }
    }

    output::print_done(&format!(
        "{} of {} files {}",
        changed,
        args.files.len(),
        if args.check { "need post processing" } else { "post processed" }
    ));

    Ok(())
}
