//! Per-lesson state: fragments, highlight, step cursor and animation flag.

use crate::domain::{LessonData, LessonKind, LessonTexts, LoopPart};
use crate::lessons;

use super::presenter::LessonView;

/// What one `advance` revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFrame {
    pub highlight: Option<LoopPart>,
    /// Trace line added by this event, if any
    pub trace: Option<String>,
    /// Console line added by this event, if any
    pub console: Option<String>,
    pub counter: String,
    /// Events consumed so far, including this one
    pub position: usize,
    pub total: usize,
}

impl StepFrame {
    pub fn is_last(&self) -> bool {
        self.position == self.total
    }
}

/// An in-progress step-by-step playback
#[derive(Debug, Clone)]
pub struct StepCursor {
    data: LessonData,
    position: usize,
    trace: Vec<String>,
    console: Vec<String>,
    counter: String,
    highlight: Option<LoopPart>,
}

impl StepCursor {
    pub fn new(data: LessonData) -> Self {
        Self {
            data,
            position: 0,
            trace: Vec::new(),
            console: Vec::new(),
            counter: String::new(),
            highlight: None,
        }
    }

    pub fn total(&self) -> usize {
        self.data.events.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.total()
    }

    /// Consume exactly one event; `None` once every event has been shown
    pub fn advance(&mut self) -> Option<StepFrame> {
        let event = self.data.events.get(self.position)?.clone();
        self.position += 1;

        if let Some(line) = &event.trace {
            self.trace.push(line.clone());
        }
        if let Some(line) = &event.console {
            self.console.push(line.clone());
        }
        if let Some(counter) = &event.counter {
            self.counter = counter.clone();
        }
        self.highlight = event.highlight;

        Some(StepFrame {
            highlight: event.highlight,
            trace: event.trace,
            console: event.console,
            counter: self.counter.clone(),
            position: self.position,
            total: self.total(),
        })
    }

    /// Everything revealed so far
    pub fn view(&self) -> LessonView {
        LessonView {
            highlight: self.highlight,
            counter: self.counter.clone(),
            trace: self.trace.join("\n"),
            console: self.console.join("\n"),
        }
    }
}

/// Mutable state of one lesson
#[derive(Debug, Clone)]
pub struct LessonSession {
    pub kind: LessonKind,
    pub texts: LessonTexts,
    pub highlight: Option<LoopPart>,
    pub cursor: Option<StepCursor>,
    pub animating: bool,
}

impl LessonSession {
    /// A fresh lesson showing its default fragments
    pub fn new(kind: LessonKind) -> Self {
        Self {
            kind,
            texts: lessons::default_texts(kind),
            highlight: None,
            cursor: None,
            animating: false,
        }
    }

    /// Restore default fragments and drop any playback
    pub fn reset(&mut self) {
        self.texts = lessons::default_texts(self.kind);
        self.highlight = None;
        self.cursor = None;
    }

    pub fn is_stepping(&self) -> bool {
        self.cursor.is_some()
    }
}
