//! # plan 命令实现
//!
//! 只做发现与过期判断，列出下一次 `build` 会提交给 j2objc 的文件。
//! 不调用翻译器，也不写入输出目录。
//!
//! ## 功能
//! - 每个源码根目录的统计表
//! - 过期文件列表（附原因：missing / outdated）
//! - 可选导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/plan.rs` 定义的参数
//! - 使用 `orchestrator.rs`, `models/`
//! - 使用 `tabled` 打印表格, `csv` 导出

use crate::cli::plan::PlanArgs;
use crate::error::{LuceneObjcError, Result};
use crate::models::RootReport;
use crate::orchestrator::Orchestrator;
use crate::utils::output;

use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

/// 根目录统计行
#[derive(Debug, Clone, Tabled)]
struct RootRow {
    #[tabled(rename = "Root")]
    root: String,
    #[tabled(rename = "Eligible")]
    eligible: usize,
    #[tabled(rename = "Excluded")]
    excluded: usize,
    #[tabled(rename = "Up to date")]
    fresh: usize,
    #[tabled(rename = "Stale")]
    stale: usize,
}

/// 过期文件行
#[derive(Debug, Clone, Tabled, Serialize)]
struct UnitRow {
    #[tabled(rename = "Root")]
    root: String,
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Output")]
    output: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// 执行 plan 命令
pub fn execute(args: PlanArgs) -> Result<()> {
    output::print_header("Planning incremental translation");

    let config = super::build_config(&args.layout);
    let orchestrator = Orchestrator::new(config)?;
    let reports = orchestrator.plan()?;

    let root_rows: Vec<RootRow> = reports.iter().map(root_row).collect();
    println!("{}", Table::new(&root_rows));

    let units = unit_rows(&reports);

    if let Some(ref csv_path) = args.csv {
        save_plan_csv(&units, csv_path)?;
        output::print_success(&format!("Plan saved to '{}'", csv_path.display()));
    }

    if units.is_empty() {
        output::print_done("Everything is up to date.");
        return Ok(());
    }

    if !args.summary {
        println!("\n{}", Table::new(&units));
    }

    output::print_done(&format!(
        "{} files would be translated on the next build",
        units.len()
    ));
    Ok(())
}

fn root_row(report: &RootReport) -> RootRow {
    RootRow {
        root: report.root.display().to_string(),
        eligible: report.eligible,
        excluded: report.excluded,
        fresh: report.fresh,
        stale: report.units.len(),
    }
}

fn unit_rows(reports: &[RootReport]) -> Vec<UnitRow> {
    reports
        .iter()
        .flat_map(|report| {
            report.units.iter().map(move |unit| UnitRow {
                root: report.root.display().to_string(),
                input: unit.input.display().to_string(),
                output: unit.output.display().to_string(),
                reason: unit.staleness.to_string(),
            })
        })
        .collect()
}

/// CSV 表头，与 `UnitRow` 字段顺序一致
const CSV_HEADER: [&str; 4] = ["root", "input", "output", "reason"];

/// 保存过期文件列表到 CSV（没有过期文件时只写表头）
fn save_plan_csv(rows: &[UnitRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output_path)
        .map_err(LuceneObjcError::CsvError)?;

    wtr.write_record(CSV_HEADER)
        .map_err(LuceneObjcError::CsvError)?;

    for row in rows {
        wtr.serialize(row).map_err(LuceneObjcError::CsvError)?;
    }

    wtr.flush().map_err(|e| LuceneObjcError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::staleness::Staleness;
    use crate::cli::build::LayoutArgs;
    use crate::models::TranslationUnit;
    use crate::rules;
    use std::path::PathBuf;

    fn report() -> RootReport {
        RootReport {
            root: PathBuf::from("./core/src/java"),
            eligible: 3,
            excluded: 1,
            fresh: 1,
            units: vec![TranslationUnit {
                input: PathBuf::from("./core/src/java/A.java"),
                output: PathBuf::from("./build/objc/A.m"),
                staleness: Staleness::Missing,
            }],
        }
    }

    #[test]
    fn test_rows() {
        let reports = vec![report()];
        let row = root_row(&reports[0]);
        assert_eq!(row.stale, 1);
        assert_eq!(row.excluded, 1);

        let units = unit_rows(&reports);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0].reason, "missing");
        assert_eq!(units[0].root, "./core/src/java");
    }

    #[test]
    fn test_save_plan_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.csv");
        save_plan_csv(&unit_rows(&[report()]), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("root,input,output,reason"));
        assert_eq!(
            lines.next(),
            Some("./core/src/java,./core/src/java/A.java,./build/objc/A.m,missing")
        );
    }

    #[test]
    fn test_save_plan_csv_header_only_when_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.csv");
        save_plan_csv(&[], &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "root,input,output,reason\n");
    }

    #[test]
    fn test_execute_writes_csv_when_up_to_date() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("plan.csv");
        let args = PlanArgs {
            layout: LayoutArgs {
                translator: PathBuf::from(rules::DEFAULT_TRANSLATOR),
                dest: dir.path().join("out"),
                source_roots: vec![dir.path().join("src")],
                extra_paths: vec![dir.path().join("classes")],
                excludes: vec![],
                no_default_excludes: true,
            },
            csv: Some(csv_path.clone()),
            summary: true,
        };

        execute(args).unwrap();

        let content = std::fs::read_to_string(&csv_path).unwrap();
        assert_eq!(content, "root,input,output,reason\n");
        assert!(!dir.path().join("out").exists());
    }
}
