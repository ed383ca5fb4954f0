//! # 源码根目录与排除模式
//!
//! 模式与遍历器生成的路径逐字比较（包括开头的 `./`），
//! 因此这里的写法必须与 `--source-root` 的写法一致。
//!
//! ## 依赖关系
//! - 被 `rules/mod.rs` 导出
//! - 无外部模块依赖

/// Lucene 各模块的 Java 源码目录，按 classpath 顺序排列
pub const DEFAULT_SOURCE_ROOTS: &[&str] = &[
    "./core/src/java",
    "./analysis/common/src/java",
    "./backward-codecs/src/java",
    "./codecs/src/java",
    "./queries/src/java",
    "./queryparser/src/java",
    "./memory/src/java",
    "./highlighter/src/java",
    "./grouping/src/java",
    "./join/src/java",
    "./misc/src/java",
    "./expressions/src/java",
    "./suggest/src/java",
    "./sandbox/src/java",
];

/// 追加在源码根目录之后的 classpath 条目
pub const DEFAULT_EXTRA_PATHS: &[&str] = &[
    // Should not be needed if we skip sandbox/queries/regex
    "./sandbox/lib/jakarta-regexp-1.4.jar",
    // ConstDoubleDocValues
    "./build/queries/classes/java",
];

/// 默认排除模式
pub const DEFAULT_EXCLUDES: &[&str] = &[
    // j2objc annotations have no Objective-C counterpart
    "./core/src/java/org/lukhnos/portmobile/j2objc/*",
    // JDK 7 BreakIterator, not implemented by jre_emul
    "./analysis/common/src/java/org/apache/lucene/analysis/hunspell/ISO8859_14Decoder.java",
    "./analysis/common/src/java/org/apache/lucene/analysis/th/*.java",
    "./analysis/common/src/java/org/apache/lucene/analysis/util/CharArrayIterator.java",
    "./analysis/common/src/java/org/apache/lucene/analysis/util/SegmentingTokenizerBase.java",
    // antlr
    "./expressions/src/java/org/apache/lucene/expressions/js/*.java",
    // BreakIterator
    "./highlighter/src/java/org/apache/lucene/search/postingshighlight/*.java",
    "./highlighter/src/java/org/apache/lucene/search/vectorhighlight/*.java",
    // unused
    "./grouping/src/java/org/apache/lucene/search/grouping/*.java",
    "./grouping/src/java/org/apache/lucene/search/grouping/function/*.java",
    "./grouping/src/java/org/apache/lucene/search/grouping/term/*.java",
    // depends on grouping
    "./join/src/java/org/apache/lucene/search/join/ToParentBlockJoinCollector.java",
    // native methods
    "./misc/src/java/org/apache/lucene/store/*.java",
    // unused
    "./misc/src/java/org/apache/lucene/uninverting/*.java",
    // needs jakarta-regexp translated first
    "./sandbox/src/java/org/apache/lucene/sandbox/queries/regex/*.java",
];
