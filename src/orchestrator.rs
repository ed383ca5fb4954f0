//! # 增量构建编排
//!
//! 按 classpath 顺序逐个处理源码根目录：
//! 收集过期单元 → 一次性调用翻译器 → 修补每个输出文件。
//! 全部根目录处理完后，再单独修补固定的几个文件。
//!
//! ## 不变量
//! - 已是最新的单元不会提交给翻译器，也不会被修补
//! - 翻译器返回非零时立即中止，后续根目录不再处理，已写出的文件保留
//! - 翻译器总是使用完整的 classpath，而不仅是当前根目录
//!
//! ## 依赖关系
//! - 被 `commands/build.rs` 和 `commands/plan.rs` 调用
//! - 使用 `batch/`, `patch/`, `models/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{BatchInvoker, PathMatcher, SourceCollector};
use crate::error::{LuceneObjcError, Result};
use crate::models::{BuildConfig, RootReport, RunSummary};
use crate::patch::{PatchEngine, PatchOutcome};
use crate::utils::{output, progress};

use std::fs;
use std::path::{Path, PathBuf};

/// 增量构建编排器
pub struct Orchestrator {
    config: BuildConfig,
    matcher: PathMatcher,
    invoker: BatchInvoker,
    engine: PatchEngine,
}

impl Orchestrator {
    pub fn new(config: BuildConfig) -> Result<Self> {
        let matcher = PathMatcher::new(&config.excludes);
        let invoker = BatchInvoker::new(
            &config.translator,
            &config.dest,
            &config.search_path(),
            &config.translator_options,
        )?;
        let engine = PatchEngine::new(config.patch_rules, &config.disable_suffix)?;
        Ok(Self {
            config,
            matcher,
            invoker,
            engine,
        })
    }

    /// 收集单个根目录中的过期单元
    pub fn plan_root(&self, root: &Path) -> Result<RootReport> {
        SourceCollector::new(root, &self.config.dest, &self.matcher)
            .extensions(&self.config.source_extension, &self.config.target_extension)
            .collect()
    }

    /// 收集全部根目录，不调用翻译器、不写入任何文件
    pub fn plan(&self) -> Result<Vec<RootReport>> {
        self.config
            .source_roots
            .iter()
            .map(|root| self.plan_root(root))
            .collect()
    }

    /// 完整的增量构建
    pub fn run(&self) -> Result<RunSummary> {
        self.invoker.ensure_available()?;
        self.prepare_dest()?;

        let search_path = self.config.search_path();
        output::print_info("Using path:");
        output::print_path_list(&search_path);

        let mut summary = RunSummary::default();

        for root in &self.config.source_roots {
            let report = self.plan_root(root)?;
            output::print_info(&format!(
                "Translating: {} with {} java files to compile.",
                root.display(),
                report.units.len()
            ));

            if !report.units.is_empty() {
                let inputs: Vec<&Path> = report.units.iter().map(|u| u.input.as_path()).collect();
                self.invoker.run(&inputs)?;
            }

            let outputs: Vec<PathBuf> = report.units.iter().map(|u| u.output.clone()).collect();
            let patched = self.patch_all(&outputs)?;
            output::print_info(&format!("Did post process {} obj-c files.", patched));

            summary.roots += 1;
            summary.translated += report.units.len();
            summary.patched += patched;
            summary.excluded += report.excluded;
            summary.fresh += report.fresh;
        }

        summary.patched += self.patch_always()?;

        Ok(summary)
    }

    /// 修补固定文件，与过期与否无关
    pub fn patch_always(&self) -> Result<usize> {
        let mut patched = 0;
        for path in self.config.always_patch_paths() {
            if self.patch_one(&path)?.changed() {
                patched += 1;
            }
        }
        Ok(patched)
    }

    /// 修补一批输出文件，返回内容被修改的文件数
    fn patch_all(&self, paths: &[PathBuf]) -> Result<usize> {
        if paths.is_empty() {
            return Ok(0);
        }

        let pb = progress::create_progress_bar(paths.len() as u64, "Post processing");
        let mut patched = 0;

        for path in paths {
            let outcome = pb.suspend(|| self.patch_one(path))?;
            if outcome.changed() {
                patched += 1;
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(patched)
    }

    fn patch_one(&self, path: &Path) -> Result<PatchOutcome> {
        let outcome = self.engine.patch(path)?;
        match outcome {
            PatchOutcome::Changed => {
                output::print_success(&format!(
                    "Post processing Objective-C code: {}",
                    path.display()
                ));
            }
            PatchOutcome::Missing => {
                output::print_warning(&format!("File does not exist at path: {}", path.display()));
            }
            PatchOutcome::Unchanged => {}
        }
        Ok(outcome)
    }

    fn prepare_dest(&self) -> Result<()> {
        let dest = &self.config.dest;
        if dest.exists() {
            return Ok(());
        }
        fs::create_dir_all(dest).map_err(|e| LuceneObjcError::FileWriteError {
            path: dest.display().to_string(),
            source: e,
        })?;
        output::print_info(&format!("Destination directory created: {}", dest.display()));
        Ok(())
    }
}
