//! Demo animation: a timed walk over the four highlight states.
//!
//! The walk holds the workbench through a shared handle and borrows it only
//! while a frame is shown, so other lessons and triggers keep working between
//! frames.

use log::debug;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::watch;

use crate::domain::{LessonKind, LoopPart};

use super::presenter::Presenter;
use super::workbench::Workbench;

/// Workbench handle shared between the UI loop and running animations
pub type SharedWorkbench<P> = Rc<RefCell<Workbench<P>>>;

/// Frames shown by the demo, in order
pub const DEMO_FRAMES: [Option<LoopPart>; 5] = [
    Some(LoopPart::Start),
    Some(LoopPart::Condition),
    Some(LoopPart::Body),
    Some(LoopPart::Step),
    None,
];

/// A claimed animation slot, obtained from `Workbench::begin_animation`
#[derive(Debug)]
pub struct DemoAnimation {
    kind: LessonKind,
}

impl DemoAnimation {
    pub(crate) fn new(kind: LessonKind) -> Self {
        Self { kind }
    }

    /// Play every frame with `delay` before each one.
    ///
    /// Any change on `cancel` (or its sender going away) stops the walk. The
    /// animation flag is released either way. Returns whether all frames were
    /// shown.
    pub async fn play<P: Presenter>(
        self,
        bench: SharedWorkbench<P>,
        delay: Duration,
        mut cancel: watch::Receiver<bool>,
    ) -> bool {
        let mut completed = true;

        for frame in DEMO_FRAMES {
            if *cancel.borrow() {
                completed = false;
                break;
            }
            let cancelled = tokio::select! {
                _ = tokio::time::sleep(delay) => false,
                _ = cancel.changed() => true,
            };
            if cancelled {
                completed = false;
                break;
            }
            bench.borrow_mut().show_demo_frame(self.kind, frame);
        }

        debug!("demo animation for {} completed: {}", self.kind, completed);
        bench.borrow_mut().finish_animation(self.kind);
        completed
    }
}
