//! Loop parts and lesson kinds

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the four editable fragments of a lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoopPart {
    Start,
    Condition,
    Step,
    Body,
}

impl LoopPart {
    /// Every part, in display order
    pub const ALL: [LoopPart; 4] = [LoopPart::Start, LoopPart::Condition, LoopPart::Step, LoopPart::Body];

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LoopPart::Start => "start",
            LoopPart::Condition => "condition",
            LoopPart::Step => "step",
            LoopPart::Body => "body",
        }
    }
}

impl std::fmt::Display for LoopPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LoopPart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(LoopPart::Start),
            "condition" => Ok(LoopPart::Condition),
            "step" => Ok(LoopPart::Step),
            "body" => Ok(LoopPart::Body),
            other => Err(format!("unknown loop part: {}", other)),
        }
    }
}

/// The three loop archetypes a lesson can teach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    For,
    While,
    ForEach,
}

impl LessonKind {
    pub const ALL: [LessonKind; 3] = [LessonKind::For, LessonKind::While, LessonKind::ForEach];

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonKind::For => "for",
            LessonKind::While => "while",
            LessonKind::ForEach => "foreach",
        }
    }
}

impl std::fmt::Display for LessonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LessonKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "for" => Ok(LessonKind::For),
            "while" => Ok(LessonKind::While),
            "foreach" | "for-each" | "for_each" => Ok(LessonKind::ForEach),
            other => Err(format!("unknown lesson: {}", other)),
        }
    }
}
