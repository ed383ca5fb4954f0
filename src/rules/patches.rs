//! # 补丁规则表
//!
//! j2objc 输出中已知缺陷的修正规则，按顺序应用。
//!
//! ## 依赖关系
//! - 被 `rules/mod.rs` 导出
//! - 使用 `patch/rule.rs` 的 `PatchRule`

use crate::patch::PatchRule;

/// 附加在被禁用代码之后的标记
pub const DISABLE_SUFFIX: &str = " // disabled by lucene-objc";

/// ConstDoubleDocValues / ConstIntDocValues 实际定义在 DocFreqValueSource.java 中，
/// j2objc 却为它们各自生成了 include。
const FAULTY_INCLUDES: &[&str] = &[
    "#include \"org/apache/lucene/queries/function/valuesource/ConstDoubleDocValues.h\"",
    "#include \"org/apache/lucene/queries/function/valuesource/ConstIntDocValues.h\"",
];

const FAULTY_INCLUDE_FIX: &str =
    "#include \"org/apache/lucene/queries/function/valuesource/DocFreqValueSource.h\"  // fixed by lucene-objc";

const DISABLED_LINES: &[&str] = &[
    "#include \"org/apache/lucene/analysis/hunspell/ISO8859_14Decoder.h\"",
    "+ (jint)PAGE_SIZE;",
];

const PAGE_SIZE_ACCESSOR: &str = r"(?mi)^\+ \(jint\)PAGE_SIZE[ ]*\{[A-Za-z_ \n;]+\}$";

const DECODER_CONSTRUCTION: &str =
    "return create_OrgApacheLuceneAnalysisHunspellISO8859_14Decoder_initPackagePrivate();";

const DECODER_STUB: &str =
    "@throw [new_JavaLangRuntimeException_initWithNSString_(@\"Not translated to Objective-C\") autorelease];";

/// 固定顺序的补丁规则
pub const PATCH_RULES: &[PatchRule] = &[
    PatchRule::LiteralReplace {
        needles: FAULTY_INCLUDES,
        replacement: FAULTY_INCLUDE_FIX,
    },
    PatchRule::CommentOut {
        needles: DISABLED_LINES,
    },
    PatchRule::RegexWrap {
        pattern: PAGE_SIZE_ACCESSOR,
    },
    PatchRule::StubReplace {
        needle: DECODER_CONSTRUCTION,
        stub: DECODER_STUB,
    },
];

/// 无论是否过期，每次运行结束时都要修补的文件（相对于输出目录）
pub const ALWAYS_PATCH_FILES: &[&str] = &["org/apache/lucene/index/DocValuesFieldUpdates.h"];
