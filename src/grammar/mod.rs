//! Pattern matching for lesson fragments.
//!
//! The accepted grammar is deliberately narrow: one pattern per loop part.
//! Matchers return `None` when a fragment does not fit; the parsers decide
//! which user-facing error that becomes.

use regex::Regex;
use std::sync::LazyLock;

use crate::domain::Comparator;

/// Identifier characters accepted for a loop variable
const IDENT: &str = r"[A-Za-z_$][A-Za-z0-9_$]*";

static START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?:(?:let|var|const)\s+)?({IDENT})\s*=\s*(-?\d+)$")).expect("start pattern")
});

static ARRAY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]*)\]").expect("array pattern"));

static MESSAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"console\.log\s*\(\s*(?:"([^"]*)"|'([^']*)'|`([^`]*)`)"#).expect("message pattern")
});

static ITEM_VAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:const|let|var)\s+({IDENT})\s+of\b")).expect("item variable pattern")
});

/// Captures from a start fragment such as `let i = 1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartMatch {
    pub variable: String,
    pub start: i64,
}

/// Captures from a condition fragment such as `i <= 5`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionMatch {
    pub comparator: Comparator,
    pub end: i64,
}

/// Captures from a step fragment such as `i = i - 2`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepMatch {
    pub negative: bool,
    pub magnitude: i64,
}

impl StepMatch {
    /// Signed amount added to the counter each iteration
    pub fn delta(&self) -> i64 {
        if self.negative { -self.magnitude } else { self.magnitude }
    }
}

/// Trim a fragment and drop one trailing `;`
pub fn strip_statement_end(text: &str) -> &str {
    let text = text.trim();
    text.strip_suffix(';').map(str::trim_end).unwrap_or(text)
}

/// `[let|var|const] <ident> = <signed integer>`
pub fn match_start(text: &str) -> Option<StartMatch> {
    let caps = START_RE.captures(strip_statement_end(text))?;
    let start = caps[2].parse().ok()?;
    Some(StartMatch {
        variable: caps[1].to_string(),
        start,
    })
}

/// `<variable> (<=|>=) <signed integer>`, anchored to the given variable
pub fn match_condition(text: &str, variable: &str) -> Option<ConditionMatch> {
    let pattern = format!(r"^{}\s*(<=|>=)\s*(-?\d+)$", regex::escape(variable));
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(strip_statement_end(text))?;
    let comparator = match &caps[1] {
        "<=" => Comparator::AtMost,
        _ => Comparator::AtLeast,
    };
    let end = caps[2].parse().ok()?;
    Some(ConditionMatch { comparator, end })
}

/// `<variable> = <variable> (+|-) <unsigned integer>`
pub fn match_step(text: &str, variable: &str) -> Option<StepMatch> {
    let var = regex::escape(variable);
    let pattern = format!(r"^{var}\s*=\s*{var}\s*([+-])\s*(\d+)$");
    let re = Regex::new(&pattern).ok()?;
    let caps = re.captures(strip_statement_end(text))?;
    let magnitude = caps[2].parse().ok()?;
    Some(StepMatch {
        negative: &caps[1] == "-",
        magnitude,
    })
}

/// Contents of the first `[...]` span
pub fn match_array(text: &str) -> Option<&str> {
    ARRAY_RE.captures(text).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}

/// First quoted string argument of a `console.log(...)` call
pub fn extract_message(body: &str) -> Option<String> {
    let caps = MESSAGE_RE.captures(body)?;
    (1..=3)
        .find_map(|i| caps.get(i))
        .map(|m| m.as_str().to_string())
}

/// Item binding named by `for (const value of values)`
pub fn match_item_variable(text: &str) -> Option<String> {
    ITEM_VAR_RE.captures(text).map(|caps| caps[1].to_string())
}
