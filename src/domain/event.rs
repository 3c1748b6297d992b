//! Lesson events and the playback data built from them.

use serde::{Deserialize, Serialize};

use super::part::LoopPart;

/// One atomic step of playback.
///
/// `highlight: None` means no part is highlighted (the loop is over).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonEvent {
    pub highlight: Option<LoopPart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub console: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter: Option<String>,
}

impl LessonEvent {
    /// Create an event highlighting `part`
    pub fn at(part: LoopPart) -> Self {
        Self {
            highlight: Some(part),
            ..Self::default()
        }
    }

    /// Create the terminal event with nothing highlighted
    pub fn finished() -> Self {
        Self::default()
    }

    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    pub fn with_console(mut self, console: impl Into<String>) -> Self {
        self.console = Some(console.into());
        self
    }

    pub fn with_counter(mut self, counter: impl Into<String>) -> Self {
        self.counter = Some(counter.into());
        self
    }
}

/// Everything a presenter needs to replay one lesson
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonData {
    pub events: Vec<LessonEvent>,
    pub trace_lines: Vec<String>,
    pub console_lines: Vec<String>,
    pub final_counter: String,
}

impl LessonData {
    /// Collect trace and console summaries from an ordered event list
    pub fn from_events(events: Vec<LessonEvent>, final_counter: impl Into<String>) -> Self {
        let trace_lines = events.iter().filter_map(|e| e.trace.clone()).collect();
        let console_lines = events.iter().filter_map(|e| e.console.clone()).collect();
        Self {
            events,
            trace_lines,
            console_lines,
            final_counter: final_counter.into(),
        }
    }

    /// Trace lines joined for a one-shot run
    pub fn trace_text(&self) -> String {
        self.trace_lines.join("\n")
    }

    /// Console lines joined for a one-shot run
    pub fn console_text(&self) -> String {
        self.console_lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builders() {
        let event = LessonEvent::at(LoopPart::Body)
            .with_trace("ran body")
            .with_console("Hello 1")
            .with_counter("i = 1");
        assert_eq!(event.highlight, Some(LoopPart::Body));
        assert_eq!(event.console.as_deref(), Some("Hello 1"));
    }

    #[test]
    fn test_finished_event_has_no_highlight() {
        assert_eq!(LessonEvent::finished().highlight, None);
    }

    #[test]
    fn test_from_events_collects_lines_in_order() {
        let events = vec![
            LessonEvent::at(LoopPart::Start).with_trace("a"),
            LessonEvent::at(LoopPart::Body).with_trace("b").with_console("x"),
            LessonEvent::at(LoopPart::Step),
            LessonEvent::finished().with_trace("c"),
        ];
        let data = LessonData::from_events(events, "i = 2");
        assert_eq!(data.trace_lines, vec!["a", "b", "c"]);
        assert_eq!(data.console_lines, vec!["x"]);
        assert_eq!(data.trace_text(), "a\nb\nc");
        assert_eq!(data.final_counter, "i = 2");
    }

    #[test]
    fn test_event_json_skips_missing_fields() {
        let json = serde_json::to_string(&LessonEvent::at(LoopPart::Step)).unwrap();
        assert_eq!(json, r#"{"highlight":"step"}"#);
    }
}
