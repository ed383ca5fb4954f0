//! # 补丁引擎
//!
//! 对单个 j2objc 输出文件按固定顺序应用补丁规则。
//!
//! ## 功能
//! - 表驱动：规则来自 `rules/patches.rs`
//! - 幂等：已修补的文件再次修补不会变化
//! - 原子写回：临时文件 + rename，中途崩溃不会留下半个文件
//!
//! ## 依赖关系
//! - 被 `orchestrator.rs` 和 `commands/patch.rs` 使用
//! - 子模块: rule
//! - 使用 `tempfile` 实现原子写入

pub mod rule;

pub use rule::PatchRule;

use crate::error::{LuceneObjcError, Result};
use rule::CompiledRule;

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// 单个文件的修补结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// 内容已修改并写回
    Changed,
    /// 内容无需修改
    Unchanged,
    /// 文件不存在
    Missing,
}

impl PatchOutcome {
    pub fn changed(self) -> bool {
        self == PatchOutcome::Changed
    }
}

/// 补丁引擎
#[derive(Debug)]
pub struct PatchEngine {
    rules: Vec<CompiledRule>,
}

impl PatchEngine {
    /// 编译规则表
    pub fn new(rules: &[PatchRule], disable_suffix: &str) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|r| CompiledRule::compile(r, disable_suffix))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// 对文本按顺序应用全部规则
    pub fn apply(&self, content: &str) -> String {
        self.rules
            .iter()
            .fold(content.to_string(), |acc, rule| rule.apply(&acc))
    }

    /// 修补文件，内容有变化时写回原路径
    pub fn patch(&self, path: &Path) -> Result<PatchOutcome> {
        self.run(path, true)
    }

    /// 只检查文件是否需要修补，不写入
    pub fn check(&self, path: &Path) -> Result<PatchOutcome> {
        self.run(path, false)
    }

    fn run(&self, path: &Path, write: bool) -> Result<PatchOutcome> {
        let code = match fs::read_to_string(path) {
            Ok(code) => code,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(PatchOutcome::Missing),
            Err(e) => {
                return Err(LuceneObjcError::FileReadError {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };

        let new_code = self.apply(&code);
        if new_code == code {
            return Ok(PatchOutcome::Unchanged);
        }

        if write {
            write_atomic(path, &new_code)?;
        }
        Ok(PatchOutcome::Changed)
    }
}

/// 写入同目录下的临时文件后 rename 覆盖目标
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let write_err = |source: std::io::Error| LuceneObjcError::FileWriteError {
        path: path.display().to_string(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;

    // NamedTempFile 默认 0600，沿用原文件权限
    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(tmp.path(), meta.permissions()).map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{DISABLE_SUFFIX, PATCH_RULES};

    const CONST_DOUBLE_INCLUDE: &str =
        "#include \"org/apache/lucene/queries/function/valuesource/ConstDoubleDocValues.h\"";
    const FIXED_INCLUDE: &str = "#include \"org/apache/lucene/queries/function/valuesource/DocFreqValueSource.h\"  // fixed by lucene-objc";

    const PAGE_SIZE_BODY: &str = "+ (jint)PAGE_SIZE {\n  return OrgApacheLuceneIndexDocValuesFieldUpdates_PAGE_SIZE;\n}";

    fn engine() -> PatchEngine {
        PatchEngine::new(PATCH_RULES, DISABLE_SUFFIX).unwrap()
    }

    fn sample_output() -> String {
        format!(
            "{}\n#include \"org/apache/lucene/queries/function/valuesource/ConstIntDocValues.h\"\n\
             #include \"org/apache/lucene/analysis/hunspell/ISO8859_14Decoder.h\"\n\
             @implementation Foo\n\n{}\n\n\
             + (id)decoder {{\n  return create_OrgApacheLuceneAnalysisHunspellISO8859_14Decoder_initPackagePrivate();\n}}\n\n@end\n",
            CONST_DOUBLE_INCLUDE, PAGE_SIZE_BODY
        )
    }

    #[test]
    fn test_faulty_include_fixed() {
        let engine = engine();
        let once = engine.apply(&format!("{}\n", CONST_DOUBLE_INCLUDE));
        assert_eq!(once, format!("{}\n", FIXED_INCLUDE));
        assert_eq!(engine.apply(&once), once);
    }

    #[test]
    fn test_page_size_accessor_wrapped_once() {
        let engine = engine();
        let once = engine.apply(&format!("@implementation X\n{}\n@end\n", PAGE_SIZE_BODY));
        let expected = format!(
            "@implementation X\n/* {} */{}\n@end\n",
            PAGE_SIZE_BODY, DISABLE_SUFFIX
        );
        assert_eq!(once, expected);
        assert_eq!(once.matches(DISABLE_SUFFIX).count(), 1);
        assert_eq!(engine.apply(&once), once);
    }

    #[test]
    fn test_page_size_declaration_commented() {
        let engine = engine();
        let once = engine.apply("+ (jint)PAGE_SIZE;\n");
        assert_eq!(once, format!("// + (jint)PAGE_SIZE;{}\n", DISABLE_SUFFIX));
        assert_eq!(engine.apply(&once), once);
    }

    #[test]
    fn test_decoder_construction_stubbed() {
        let engine = engine();
        let once = engine.apply(&sample_output());
        assert!(once.contains("@\"Not translated to Objective-C\""));
        assert!(!once.contains("ISO8859_14Decoder_initPackagePrivate"));
    }

    #[test]
    fn test_full_rule_set_is_idempotent() {
        let engine = engine();
        let once = engine.apply(&sample_output());
        assert_ne!(once, sample_output());
        assert_eq!(engine.apply(&once), once);
        // include fix, commented include, wrapped accessor, stub
        assert_eq!(once.matches(DISABLE_SUFFIX).count(), 3);
        assert_eq!(once.matches(FIXED_INCLUDE).count(), 2);
    }

    #[test]
    fn test_clean_content_untouched() {
        let text = "@implementation Clean\n@end\n";
        assert_eq!(engine().apply(text), text);
    }

    #[test]
    fn test_patch_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Foo.m");
        fs::write(&path, sample_output()).unwrap();

        let engine = engine();
        assert_eq!(engine.patch(&path).unwrap(), PatchOutcome::Changed);
        let patched = fs::read_to_string(&path).unwrap();
        assert_eq!(patched, engine.apply(&sample_output()));

        assert_eq!(engine.patch(&path).unwrap(), PatchOutcome::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), patched);
    }

    #[test]
    fn test_check_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Foo.m");
        fs::write(&path, sample_output()).unwrap();

        assert_eq!(engine().check(&path).unwrap(), PatchOutcome::Changed);
        assert_eq!(fs::read_to_string(&path).unwrap(), sample_output());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = engine().patch(&dir.path().join("Nope.m")).unwrap();
        assert_eq!(outcome, PatchOutcome::Missing);
        assert!(!outcome.changed());
    }
}
