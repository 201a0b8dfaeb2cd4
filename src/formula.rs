//! # 化学式解析器
//!
//! 将简单化学式（如 `Fe2O3`）分解为元素及其原子分数。
//!
//! ## 扫描规则
//! ```text
//! 状态:   Symbol (正在读元素符号) / Count (正在读计数)
//! 输入:   大写字母 -> 结束上一个元素，开始新符号
//!         小写字母 -> 追加到当前符号 (Fe, Cl, ...)
//!         数字     -> 追加到当前计数 (多位数累加)
//!         其他字符 -> 忽略
//! ```
//! 第 0 个字符总是开启第一个符号；没有计数的元素按 1 计。
//! 不支持括号、结晶水、电荷和同位素写法，此类输入会得到
//! 尽力而为的分解结果，而不是报错。
//!
//! ## 依赖关系
//! - 被 `models/component.rs` 和 `commands/formula.rs` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 元素组成：元素符号与原子分数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementalComposition {
    pub element: String,
    pub atomic_fraction: f64,
}

impl ElementalComposition {
    pub fn new(element: impl Into<String>, atomic_fraction: f64) -> Self {
        ElementalComposition {
            element: element.into(),
            atomic_fraction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Symbol,
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit(u32),
    Other,
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch.is_uppercase() {
            CharClass::Upper
        } else if ch.is_lowercase() {
            CharClass::Lower
        } else if ch.is_ascii_digit() {
            CharClass::Digit(ch as u32 - '0' as u32)
        } else {
            CharClass::Other
        }
    }
}

/// 逐字符扫描状态机
struct Scanner {
    state: ScanState,
    symbol: String,
    count: Option<u64>,
    out: Vec<(String, u64)>,
}

impl Scanner {
    fn start(first: char) -> Self {
        Scanner {
            state: ScanState::Symbol,
            symbol: first.to_string(),
            count: None,
            out: Vec::new(),
        }
    }

    fn feed(&mut self, ch: char) {
        match (self.state, CharClass::of(ch)) {
            (_, CharClass::Upper) => {
                self.close();
                self.symbol.push(ch);
                self.state = ScanState::Symbol;
            }
            (ScanState::Symbol, CharClass::Lower) => self.symbol.push(ch),
            (ScanState::Count, CharClass::Lower) => {
                // 计数之后出现的小写字母同样并入符号
                self.symbol.push(ch);
            }
            (_, CharClass::Digit(d)) => {
                let n = self.count.unwrap_or(0);
                self.count = Some(n.saturating_mul(10).saturating_add(u64::from(d)));
                self.state = ScanState::Count;
            }
            (_, CharClass::Other) => {}
        }
    }

    fn close(&mut self) {
        let symbol = std::mem::take(&mut self.symbol);
        self.out.push((symbol, self.count.take().unwrap_or(1)));
    }

    fn finish(mut self) -> Vec<(String, u64)> {
        self.close();
        self.out
    }
}

/// 扫描化学式，返回按首次出现顺序排列的 (元素, 计数)
///
/// 同一元素多次出现时会得到多条记录，不做合并。
pub fn parse_counts(formula: &str) -> Vec<(String, u64)> {
    let mut chars = formula.chars();
    let Some(first) = chars.next() else {
        return Vec::new();
    };

    let mut scanner = Scanner::start(first);
    for ch in chars {
        scanner.feed(ch);
    }
    scanner.finish()
}

/// 解析化学式为元素组成
///
/// 原子分数 = 计数 / 总计数。
///
/// ```text
/// parse("Fe2O3") -> [("Fe", 0.4), ("O", 0.6)]
/// ```
pub fn parse(formula: &str) -> Vec<ElementalComposition> {
    let counts = parse_counts(formula);
    let total: u64 = counts.iter().fold(0u64, |acc, (_, n)| acc.saturating_add(*n));

    counts
        .into_iter()
        .map(|(element, n)| {
            let fraction = if total == 0 {
                0.0
            } else {
                n as f64 / total as f64
            };
            ElementalComposition::new(element, fraction)
        })
        .collect()
}

/// 将元素组成格式化为紧凑字符串，如 `Fe:0.4000 O:0.6000`
pub fn format_composition(composition: &[ElementalComposition]) -> String {
    composition
        .iter()
        .map(|c| format!("{}:{:.4}", c.element, c.atomic_fraction))
        .collect::<Vec<_>>()
        .join(" ")
}
