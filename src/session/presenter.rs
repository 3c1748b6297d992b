//! Presentation port.
//!
//! The core never draws anything itself. The workbench calls a `Presenter`
//! whenever a lesson's visible state changes.

use crate::domain::{LessonKind, LoopPart};

/// What a lesson currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonView {
    pub highlight: Option<LoopPart>,
    pub counter: String,
    pub trace: String,
    pub console: String,
}

/// Implemented by whatever displays lessons (terminal, browser bridge, tests)
pub trait Presenter {
    /// Replace the lesson's highlight, counter, trace and console
    fn render(&mut self, kind: LessonKind, view: &LessonView);

    /// Show a parse failure in place of trace, console and counter
    fn error(&mut self, kind: LessonKind, message: &str);

    /// Move only the highlight; trace, console and counter stay as they are
    fn highlight(&mut self, kind: LessonKind, part: Option<LoopPart>);
}

/// One call received by a `RecordingPresenter`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCall {
    Render(LessonKind, LessonView),
    Error(LessonKind, String),
    Highlight(LessonKind, Option<LoopPart>),
}

/// Presenter that records every call, for tests and headless use
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub calls: Vec<PresenterCall>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent render for `kind`
    pub fn last_view(&self, kind: LessonKind) -> Option<&LessonView> {
        self.calls.iter().rev().find_map(|call| match call {
            PresenterCall::Render(k, view) if *k == kind => Some(view),
            _ => None,
        })
    }

    /// Most recent error for `kind`
    pub fn last_error(&self, kind: LessonKind) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            PresenterCall::Error(k, message) if *k == kind => Some(message.as_str()),
            _ => None,
        })
    }

    /// Every highlight-only update, in order
    pub fn highlights(&self, kind: LessonKind) -> Vec<Option<LoopPart>> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PresenterCall::Highlight(k, part) if *k == kind => Some(*part),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, kind: LessonKind, view: &LessonView) {
        self.calls.push(PresenterCall::Render(kind, view.clone()));
    }

    fn error(&mut self, kind: LessonKind, message: &str) {
        self.calls.push(PresenterCall::Error(kind, message.to_string()));
    }

    fn highlight(&mut self, kind: LessonKind, part: Option<LoopPart>) {
        self.calls.push(PresenterCall::Highlight(kind, part));
    }
}
