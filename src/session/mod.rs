//! Lesson sessions
//!
//! - `Workbench`: session manager reacting to reset/edit/run/step/advance/select triggers
//! - `LessonSession` / `StepCursor`: per-lesson state and step-by-step playback
//! - `Presenter`: port the workbench renders through
//! - `DemoAnimation`: cancellable timed highlight walk

pub mod demo;
pub mod lesson;
pub mod presenter;
pub mod workbench;

pub use demo::{DEMO_FRAMES, DemoAnimation, SharedWorkbench};
pub use lesson::{LessonSession, StepCursor, StepFrame};
pub use presenter::{LessonView, Presenter, PresenterCall, RecordingPresenter};
pub use workbench::Workbench;
