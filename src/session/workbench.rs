//! The workbench owns every lesson session and turns UI triggers into
//! presenter updates.
//!
//! At most one lesson owns a step sequence at a time. `run`, `step`, `edit`
//! and `reset` all cancel whatever sequence is in progress before doing
//! anything else.

use log::{debug, info, warn};

use crate::domain::{LessonData, LessonKind, LessonTexts, LoopPart};
use crate::error::ParseResult;
use crate::executor::build_lesson_data;
use crate::lessons;

use super::demo::DemoAnimation;
use super::lesson::{LessonSession, StepCursor, StepFrame};
use super::presenter::{LessonView, Presenter};

/// Session manager for the three lessons
pub struct Workbench<P: Presenter> {
    sessions: [LessonSession; 3],
    active_step: Option<LessonKind>,
    presenter: P,
}

fn slot(kind: LessonKind) -> usize {
    match kind {
        LessonKind::For => 0,
        LessonKind::While => 1,
        LessonKind::ForEach => 2,
    }
}

impl<P: Presenter> Workbench<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            sessions: LessonKind::ALL.map(LessonSession::new),
            active_step: None,
            presenter,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn session(&self, kind: LessonKind) -> &LessonSession {
        &self.sessions[slot(kind)]
    }

    fn session_mut(&mut self, kind: LessonKind) -> &mut LessonSession {
        &mut self.sessions[slot(kind)]
    }

    pub fn texts(&self, kind: LessonKind) -> &LessonTexts {
        &self.session(kind).texts
    }

    /// Lesson that currently owns a step sequence
    pub fn active_step(&self) -> Option<LessonKind> {
        self.active_step
    }

    /// Drop the in-progress step sequence, whichever lesson owns it
    pub fn cancel_step(&mut self) {
        let Some(kind) = self.active_step.take() else {
            return;
        };
        debug!("cancel_step: clearing {} sequence", kind);
        let session = self.session_mut(kind);
        session.cursor = None;
        session.highlight = None;
        self.presenter.render(kind, &LessonView::default());
    }

    /// Text edit on one part
    pub fn edit(&mut self, kind: LessonKind, part: LoopPart, text: impl Into<String>) {
        self.cancel_step();
        self.session_mut(kind).texts.set(part, text);
    }

    /// Replace all four fragments at once
    pub fn load(&mut self, kind: LessonKind, texts: LessonTexts) {
        self.cancel_step();
        self.session_mut(kind).texts = texts;
    }

    /// Restore default fragments and clear the display
    pub fn reset(&mut self, kind: LessonKind) {
        info!("reset: {}", kind);
        self.cancel_step();
        self.session_mut(kind).reset();
        self.presenter.render(kind, &LessonView::default());
    }

    /// Parse, execute and show the whole lesson at once
    pub fn run(&mut self, kind: LessonKind) -> ParseResult<LessonData> {
        info!("run: {}", kind);
        self.cancel_step();
        let data = self.build(kind)?;

        self.session_mut(kind).highlight = None;
        let view = LessonView {
            highlight: None,
            counter: data.final_counter.clone(),
            trace: data.trace_text(),
            console: data.console_text(),
        };
        self.presenter.render(kind, &view);
        Ok(data)
    }

    /// Start a fresh step sequence; returns how many events it holds
    pub fn step(&mut self, kind: LessonKind) -> ParseResult<usize> {
        info!("step: {}", kind);
        self.cancel_step();
        let data = self.build(kind)?;
        let cursor = StepCursor::new(data);
        let total = cursor.total();

        let session = self.session_mut(kind);
        session.highlight = None;
        session.cursor = Some(cursor);
        self.active_step = Some(kind);
        self.presenter.render(kind, &LessonView::default());
        Ok(total)
    }

    /// Reveal the next event of `kind`'s sequence; no-op when there is none
    pub fn advance(&mut self, kind: LessonKind) -> Option<StepFrame> {
        if self.active_step != Some(kind) {
            debug!("advance: {} has no active sequence", kind);
            return None;
        }
        let session = &mut self.sessions[slot(kind)];
        let cursor = session.cursor.as_mut()?;
        let frame = cursor.advance()?;
        session.highlight = frame.highlight;
        let view = cursor.view();
        self.presenter.render(kind, &view);
        Some(frame)
    }

    /// Highlight one part and return its explanation
    pub fn select_part(&mut self, kind: LessonKind, part: LoopPart) -> &'static str {
        self.session_mut(kind).highlight = Some(part);
        self.presenter.highlight(kind, Some(part));
        lessons::explain(kind, part)
    }

    /// Claim the demo animation for `kind`; `None` while one is already running
    pub fn begin_animation(&mut self, kind: LessonKind) -> Option<DemoAnimation> {
        let session = self.session_mut(kind);
        if session.animating {
            debug!("begin_animation: {} already animating", kind);
            return None;
        }
        session.animating = true;
        Some(DemoAnimation::new(kind))
    }

    /// Show one animation frame; only the highlight changes
    pub fn show_demo_frame(&mut self, kind: LessonKind, part: Option<LoopPart>) {
        self.presenter.highlight(kind, part);
    }

    /// Release the animation flag and restore the lesson's own highlight
    pub fn finish_animation(&mut self, kind: LessonKind) {
        let session = self.session_mut(kind);
        session.animating = false;
        let highlight = session.highlight;
        self.presenter.highlight(kind, highlight);
    }

    fn build(&mut self, kind: LessonKind) -> ParseResult<LessonData> {
        match build_lesson_data(kind, &self.session(kind).texts) {
            Ok(data) => Ok(data),
            Err(err) => {
                warn!("{}: {}", kind, err);
                self.session_mut(kind).highlight = None;
                self.presenter.error(kind, &err.to_string());
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LessonError;
    use crate::session::presenter::{PresenterCall, RecordingPresenter};

    fn bench() -> Workbench<RecordingPresenter> {
        Workbench::new(RecordingPresenter::new())
    }

    #[test]
    fn test_run_renders_joined_text() {
        let mut bench = bench();
        let data = bench.run(LessonKind::For).unwrap();
        let view = bench.presenter().last_view(LessonKind::For).unwrap();
        assert_eq!(view.counter, "i = 6");
        assert_eq!(view.trace, data.trace_lines.join("\n"));
        assert_eq!(view.console.lines().count(), 5);
        assert_eq!(view.highlight, None);
    }

    #[test]
    fn test_run_error_reports_message_and_keeps_text() {
        let mut bench = bench();
        bench.edit(LessonKind::For, LoopPart::Step, "i = i - 1");
        let err = bench.run(LessonKind::For).unwrap_err();
        assert_eq!(err, LessonError::StepDirection(crate::domain::Comparator::AtMost));
        assert_eq!(
            bench.presenter().last_error(LessonKind::For),
            Some("A <= comparison needs a positive step.")
        );
        assert_eq!(bench.texts(LessonKind::For).step, "i = i - 1");
    }

    #[test]
    fn test_step_then_advance_matches_build_order() {
        let mut bench = bench();
        let expected = build_lesson_data(LessonKind::ForEach, &lessons::default_texts(LessonKind::ForEach)).unwrap();
        let total = bench.step(LessonKind::ForEach).unwrap();
        assert_eq!(total, expected.events.len());

        for event in &expected.events {
            let frame = bench.advance(LessonKind::ForEach).unwrap();
            assert_eq!(frame.highlight, event.highlight);
            assert_eq!(frame.trace, event.trace);
            assert_eq!(frame.console, event.console);
        }
        assert!(bench.advance(LessonKind::ForEach).is_none());
    }

    #[test]
    fn test_exhausted_advance_does_not_render() {
        let mut bench = bench();
        bench.step(LessonKind::For).unwrap();
        while bench.advance(LessonKind::For).is_some() {}
        let calls = bench.presenter().calls.len();
        assert!(bench.advance(LessonKind::For).is_none());
        assert_eq!(bench.presenter().calls.len(), calls);
    }

    #[test]
    fn test_advance_other_lesson_is_noop() {
        let mut bench = bench();
        bench.step(LessonKind::For).unwrap();
        assert!(bench.advance(LessonKind::While).is_none());
        assert_eq!(bench.session(LessonKind::For).cursor.as_ref().unwrap().position(), 0);
    }

    #[test]
    fn test_step_on_other_lesson_cancels_previous() {
        let mut bench = bench();
        bench.step(LessonKind::For).unwrap();
        bench.advance(LessonKind::For);
        bench.step(LessonKind::While).unwrap();

        assert_eq!(bench.active_step(), Some(LessonKind::While));
        assert!(!bench.session(LessonKind::For).is_stepping());
        assert!(bench.advance(LessonKind::For).is_none());
        assert_eq!(bench.presenter().last_view(LessonKind::For), Some(&LessonView::default()));
    }

    #[test]
    fn test_edit_cancels_sequence() {
        let mut bench = bench();
        bench.step(LessonKind::For).unwrap();
        bench.edit(LessonKind::ForEach, LoopPart::Start, "[1]");
        assert_eq!(bench.active_step(), None);
        assert!(bench.advance(LessonKind::For).is_none());
    }

    #[test]
    fn test_restarting_step_starts_from_the_top() {
        let mut bench = bench();
        bench.step(LessonKind::For).unwrap();
        bench.advance(LessonKind::For);
        bench.advance(LessonKind::For);
        bench.step(LessonKind::For).unwrap();
        let frame = bench.advance(LessonKind::For).unwrap();
        assert_eq!(frame.position, 1);
        assert_eq!(frame.highlight, Some(LoopPart::Start));
    }

    #[test]
    fn test_failed_step_leaves_nothing_active() {
        let mut bench = bench();
        bench.edit(LessonKind::ForEach, LoopPart::Start, "[a, b]");
        assert_eq!(bench.step(LessonKind::ForEach).unwrap_err(), LessonError::NotANumber);
        assert_eq!(bench.active_step(), None);
        assert!(bench.advance(LessonKind::ForEach).is_none());
    }

    #[test]
    fn test_reset_restores_defaults_and_clears_sequence() {
        let mut bench = bench();
        bench.edit(LessonKind::While, LoopPart::Condition, "i <= 9");
        bench.step(LessonKind::While).unwrap();
        bench.advance(LessonKind::While);

        bench.reset(LessonKind::While);
        assert_eq!(bench.texts(LessonKind::While), &lessons::default_texts(LessonKind::While));
        assert_eq!(bench.active_step(), None);
        assert!(!bench.session(LessonKind::While).is_stepping());
        assert_eq!(bench.presenter().last_view(LessonKind::While), Some(&LessonView::default()));
    }

    #[test]
    fn test_select_part_highlights_and_explains() {
        let mut bench = bench();
        let text = bench.select_part(LessonKind::For, LoopPart::Condition);
        assert_eq!(text, lessons::explain(LessonKind::For, LoopPart::Condition));
        assert_eq!(bench.session(LessonKind::For).highlight, Some(LoopPart::Condition));
        assert_eq!(
            bench.presenter().calls.last(),
            Some(&PresenterCall::Highlight(LessonKind::For, Some(LoopPart::Condition)))
        );
    }

    #[test]
    fn test_animation_flag_guards_reentry() {
        let mut bench = bench();
        assert!(bench.begin_animation(LessonKind::For).is_some());
        assert!(bench.begin_animation(LessonKind::For).is_none());
        assert!(bench.begin_animation(LessonKind::While).is_some());

        bench.finish_animation(LessonKind::For);
        assert!(!bench.session(LessonKind::For).animating);
        assert!(bench.begin_animation(LessonKind::For).is_some());
    }
}
