//! Loop executor
//!
//! Symbolically runs a validated lesson and lays out its playback events.
//! Building never fails; all validation happens in the parsers.

pub mod counter;
pub mod foreach;

pub use counter::build_counter_lesson_data;
pub use foreach::{build_for_each_lesson_data, for_each_counter};

use crate::domain::{LessonData, LessonKind, LessonTexts};
use crate::error::ParseResult;
use crate::parser::{parse_counter_config, parse_for_each_config};

/// Parse and execute the current fragments of a lesson in one go
pub fn build_lesson_data(kind: LessonKind, texts: &LessonTexts) -> ParseResult<LessonData> {
    match kind {
        LessonKind::For | LessonKind::While => {
            let config = parse_counter_config(texts)?;
            Ok(build_counter_lesson_data(kind, &config))
        }
        LessonKind::ForEach => {
            let config = parse_for_each_config(texts)?;
            Ok(build_for_each_lesson_data(&config))
        }
    }
}
