//! Domain types for looplab
//!
//! - LoopPart / LessonKind: which fragment, which lesson
//! - LessonTexts: the four raw fragments of a lesson
//! - CounterConfig / ForEachConfig: validated loop descriptions
//! - LessonEvent / LessonData: playback output of the executor

pub mod config;
pub mod event;
pub mod part;

pub use config::{Comparator, CounterConfig, ForEachConfig, LessonTexts};
pub use event::{LessonData, LessonEvent};
pub use part::{LessonKind, LoopPart};
