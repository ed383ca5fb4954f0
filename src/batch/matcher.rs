//! # 排除模式匹配
//!
//! shell glob 语义（同 fnmatch）：`*` 可以跨越 `/`，`?` 匹配单个字符，
//! `[...]` 匹配字符类。路径按原样比较，不做规范化、大小写折叠或符号链接解析。
//!
//! `glob` crate 的 `**` 有递归目录含义，与 fnmatch 不同，因此连续的 `*`
//! 先折叠为一个；没有闭合的 `[` 按字面字符处理，其余部分仍是 glob。
//! 写错的模式不会报错，只是不生效，排除表仍然可以逐条审查。
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs` 使用
//! - 使用 `glob` crate

use glob::{MatchOptions, Pattern};
use std::path::Path;

const FNMATCH: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// 单条排除模式
#[derive(Debug, Clone)]
enum Rule {
    Glob(Pattern),
    Literal(String),
}

impl Rule {
    fn parse(pattern: &str) -> Self {
        match Pattern::new(&to_glob(pattern)) {
            Ok(p) => Rule::Glob(p),
            Err(_) => Rule::Literal(pattern.to_string()),
        }
    }

    fn matches(&self, path: &str) -> bool {
        match self {
            Rule::Glob(p) => p.matches_with(path, FNMATCH),
            Rule::Literal(s) => s == path,
        }
    }
}

/// 把 fnmatch 模式改写为 `glob` crate 语法
fn to_glob(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                out.push('*');
                while i + 1 < chars.len() && chars[i + 1] == '*' {
                    i += 1;
                }
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end;
                }
                None => out.push_str(&Pattern::escape("[")),
            },
            c => out.push(c),
        }
        i += 1;
    }

    out
}

/// 字符类的闭合 `]` 位置；紧跟 `[` 或 `[!` 的 `]` 属于类内容
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if j < chars.len() && chars[j] == '!' {
        j += 1;
    }
    if j < chars.len() && chars[j] == ']' {
        j += 1;
    }
    (j..chars.len()).find(|&k| chars[k] == ']')
}

/// 路径排除匹配器
#[derive(Debug, Clone, Default)]
pub struct PathMatcher {
    rules: Vec<Rule>,
}

impl PathMatcher {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        Self {
            rules: patterns.iter().map(|p| Rule::parse(p.as_ref())).collect(),
        }
    }

    /// 任一模式匹配即为排除
    pub fn matches(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        self.rules.iter().any(|r| r.matches(&path))
    }
}
