//! # 补丁规则
//!
//! 四种文本修正规则，均为文本内容的纯函数且幂等：
//! 对已修补的内容再次应用不会产生任何变化。
//!
//! ## 依赖关系
//! - 被 `patch/mod.rs` 和 `rules/patches.rs` 使用
//! - 使用 `regex` crate

use crate::error::{LuceneObjcError, Result};

use regex::{Captures, Regex};

/// 静态补丁规则（配置数据）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchRule {
    /// 多个字面量统一替换为同一行
    LiteralReplace {
        needles: &'static [&'static str],
        replacement: &'static str,
    },
    /// 原地注释掉并追加禁用标记
    CommentOut { needles: &'static [&'static str] },
    /// 正则匹配的代码段包进块注释并追加禁用标记
    RegexWrap { pattern: &'static str },
    /// 替换为抛出运行时错误的桩代码并追加禁用标记
    StubReplace {
        needle: &'static str,
        stub: &'static str,
    },
}

/// 编译后的规则
#[derive(Debug)]
pub(crate) enum CompiledRule {
    LiteralReplace {
        needles: &'static [&'static str],
        replacement: String,
    },
    CommentOut {
        needles: &'static [&'static str],
        suffix: String,
    },
    RegexWrap {
        regex: Regex,
        suffix: String,
    },
    StubReplace {
        needle: &'static str,
        stub: String,
    },
}

impl CompiledRule {
    /// 编译规则，禁用标记在此时固定
    pub(crate) fn compile(rule: &PatchRule, suffix: &str) -> Result<Self> {
        let compiled = match *rule {
            PatchRule::LiteralReplace {
                needles,
                replacement,
            } => CompiledRule::LiteralReplace {
                needles,
                replacement: replacement.to_string(),
            },
            PatchRule::CommentOut { needles } => CompiledRule::CommentOut {
                needles,
                suffix: suffix.to_string(),
            },
            PatchRule::RegexWrap { pattern } => {
                let regex = Regex::new(pattern).map_err(|e| LuceneObjcError::InvalidPatchRule {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })?;
                CompiledRule::RegexWrap {
                    regex,
                    suffix: suffix.to_string(),
                }
            }
            PatchRule::StubReplace { needle, stub } => CompiledRule::StubReplace {
                needle,
                stub: format!("{}{}", stub, suffix),
            },
        };
        Ok(compiled)
    }

    /// 对全文应用规则
    pub(crate) fn apply(&self, text: &str) -> String {
        match self {
            CompiledRule::LiteralReplace {
                needles,
                replacement,
            } => needles.iter().fold(text.to_string(), |acc, needle| {
                replace_outside(&acc, needle, replacement)
            }),
            CompiledRule::CommentOut { needles, suffix } => {
                needles.iter().fold(text.to_string(), |acc, needle| {
                    let disabled = format!("// {}{}", needle, suffix);
                    replace_outside(&acc, needle, &disabled)
                })
            }
            CompiledRule::RegexWrap { regex, suffix } => regex
                .replace_all(text, |caps: &Captures| {
                    format!("/* {} */{}", &caps[0], suffix)
                })
                .into_owned(),
            CompiledRule::StubReplace { needle, stub } => replace_outside(text, needle, stub),
        }
    }
}

/// 替换 `needle`，但跳过已经是 `replacement` 一部分的出现位置
///
/// 当替换结果本身包含 `needle`（例如注释掉的行）时，先按 `replacement`
/// 切分，只在切分后的片段中替换。
pub(crate) fn replace_outside(text: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return text.to_string();
    }
    if !replacement.contains(needle) {
        return text.replace(needle, replacement);
    }
    text.split(replacement)
        .map(|segment| segment.replace(needle, replacement))
        .collect::<Vec<_>>()
        .join(replacement)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUFFIX: &str = " // disabled";

    fn compile(rule: PatchRule) -> CompiledRule {
        CompiledRule::compile(&rule, SUFFIX).unwrap()
    }

    #[test]
    fn test_literal_replace_many_to_one() {
        let rule = compile(PatchRule::LiteralReplace {
            needles: &["#include \"A.h\"", "#include \"B.h\""],
            replacement: "#include \"AB.h\"",
        });
        let text = "#include \"A.h\"\n#include \"B.h\"\nint x;\n";
        let once = rule.apply(text);
        assert_eq!(once, "#include \"AB.h\"\n#include \"AB.h\"\nint x;\n");
        assert_eq!(rule.apply(&once), once);
    }

    #[test]
    fn test_comment_out_preserves_text() {
        let rule = compile(PatchRule::CommentOut {
            needles: &["+ (jint)PAGE_SIZE;"],
        });
        let text = "@interface Foo\n+ (jint)PAGE_SIZE;\n@end\n";
        let once = rule.apply(text);
        assert_eq!(
            once,
            "@interface Foo\n// + (jint)PAGE_SIZE; // disabled\n@end\n"
        );
        assert_eq!(rule.apply(&once), once);
    }

    #[test]
    fn test_comment_out_mixed_content() {
        let rule = compile(PatchRule::CommentOut {
            needles: &["bad();"],
        });
        let text = "// bad(); // disabled\nbad();\n";
        let patched = rule.apply(text);
        assert_eq!(patched, "// bad(); // disabled\n// bad(); // disabled\n");
        assert_eq!(patched.matches(SUFFIX).count(), 2);
    }

    #[test]
    fn test_regex_wrap() {
        let rule = compile(PatchRule::RegexWrap {
            pattern: r"(?m)^\+ f \{[a-z \n;]+\}$",
        });
        let text = "x\n+ f {\n  return;\n}\ny\n";
        let once = rule.apply(text);
        assert_eq!(once, "x\n/* + f {\n  return;\n} */ // disabled\ny\n");
        assert_eq!(rule.apply(&once), once);
    }

    #[test]
    fn test_stub_replace() {
        let rule = compile(PatchRule::StubReplace {
            needle: "return make();",
            stub: "@throw nil;",
        });
        let once = rule.apply("  return make();\n");
        assert_eq!(once, "  @throw nil; // disabled\n");
        assert_eq!(rule.apply(&once), once);
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let result = CompiledRule::compile(&PatchRule::RegexWrap { pattern: "(" }, SUFFIX);
        assert!(matches!(
            result,
            Err(LuceneObjcError::InvalidPatchRule { .. })
        ));
    }

    #[test]
    fn test_replace_outside_empty_needle() {
        assert_eq!(replace_outside("abc", "", "x"), "abc");
    }
}
