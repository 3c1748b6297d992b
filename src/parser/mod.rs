//! Lesson parsers
//!
//! Turn raw fragments into validated loop descriptions. Every failure is a
//! `LessonError` whose message is shown to the user verbatim.

pub mod counter;
pub mod foreach;
pub mod sequence;

pub use counter::{DEFAULT_COUNTER_MESSAGE, parse_counter_config};
pub use foreach::{DEFAULT_FOR_EACH_MESSAGE, DEFAULT_ITEM_VARIABLE, parse_for_each_config};
pub use sequence::{GUARD_CAP, Sequence, derive_counter_values};
