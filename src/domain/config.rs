//! Loop descriptions produced by the parsers

use serde::{Deserialize, Serialize};

use super::part::LoopPart;

/// The four raw fragments of a lesson, exactly as the user typed them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonTexts {
    pub start: String,
    pub condition: String,
    pub step: String,
    pub body: String,
}

impl LessonTexts {
    pub fn new(
        start: impl Into<String>,
        condition: impl Into<String>,
        step: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            condition: condition.into(),
            step: step.into(),
            body: body.into(),
        }
    }

    /// Raw text of one part
    pub fn get(&self, part: LoopPart) -> &str {
        match part {
            LoopPart::Start => &self.start,
            LoopPart::Condition => &self.condition,
            LoopPart::Step => &self.step,
            LoopPart::Body => &self.body,
        }
    }

    /// Replace the raw text of one part
    pub fn set(&mut self, part: LoopPart, text: impl Into<String>) {
        let slot = match part {
            LoopPart::Start => &mut self.start,
            LoopPart::Condition => &mut self.condition,
            LoopPart::Step => &mut self.step,
            LoopPart::Body => &mut self.body,
        };
        *slot = text.into();
    }

    /// Copy with every fragment trimmed
    pub fn trimmed(&self) -> LessonTexts {
        LessonTexts::new(
            self.start.trim(),
            self.condition.trim(),
            self.step.trim(),
            self.body.trim(),
        )
    }
}

/// Comparison operator allowed in a counting condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparator {
    /// `<=`, counts up
    #[serde(rename = "<=")]
    AtMost,
    /// `>=`, counts down
    #[serde(rename = ">=")]
    AtLeast,
}

impl Comparator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::AtMost => "<=",
            Comparator::AtLeast => ">=",
        }
    }

    /// Whether the loop keeps running for `value`
    pub fn holds(&self, value: i64, end: i64) -> bool {
        match self {
            Comparator::AtMost => value <= end,
            Comparator::AtLeast => value >= end,
        }
    }

    /// Whether `step` moves the counter in the direction this comparison needs
    pub fn accepts_step(&self, step: i64) -> bool {
        match self {
            Comparator::AtMost => step > 0,
            Comparator::AtLeast => step < 0,
        }
    }

    /// "positive" or "negative"
    pub fn required_direction(&self) -> &'static str {
        match self {
            Comparator::AtMost => "positive",
            Comparator::AtLeast => "negative",
        }
    }
}

impl std::fmt::Display for Comparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated counting loop (`for` or `while`)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterConfig {
    pub variable: String,
    pub start: i64,
    pub comparator: Comparator,
    pub end: i64,
    pub step: i64,
    /// Every counter value the body runs with
    pub values: Vec<i64>,
    /// Counter value once the condition first fails
    pub next_value: i64,
    pub message: String,
    /// Trimmed source fragments, kept for trace rendering
    pub texts: LessonTexts,
}

/// A validated iteration loop over an array literal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForEachConfig {
    pub values: Vec<f64>,
    pub message: String,
    /// Name the body uses for the current item
    pub item_variable: String,
    pub texts: LessonTexts,
}
