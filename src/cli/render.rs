//! Terminal presenter.

use colored::*;
use looplab::domain::{LessonKind, LoopPart};
use looplab::session::{LessonView, Presenter, StepFrame};

/// Prints lesson updates to stdout
pub struct TerminalPresenter {
    show_counter: bool,
}

impl TerminalPresenter {
    pub fn new(color: bool, show_counter: bool) -> Self {
        colored::control::set_override(color);
        Self { show_counter }
    }

    /// One line per revealed step
    pub fn print_frame(&self, frame: &StepFrame) {
        let marker = format!("[{}/{}]", frame.position, frame.total).dimmed();
        println!("{} {}", marker, part_label(frame.highlight));
        if let Some(trace) = &frame.trace {
            println!("    {}", trace);
        }
        if let Some(console) = &frame.console {
            println!("    {} {}", ">".green(), console.green());
        }
        if self.show_counter {
            println!("    {}", frame.counter.yellow());
        }
    }
}

fn part_label(part: Option<LoopPart>) -> ColoredString {
    match part {
        Some(part) => part.as_str().to_uppercase().cyan().bold(),
        None => "DONE".magenta().bold(),
    }
}

impl Presenter for TerminalPresenter {
    fn render(&mut self, kind: LessonKind, view: &LessonView) {
        // Blank views are clears; the terminal has nothing to wipe.
        if view == &LessonView::default() {
            log::debug!("render: cleared {}", kind);
            return;
        }
        if view.highlight.is_none() && !view.trace.is_empty() {
            println!("{}", "Trace".bold().underline());
            println!("{}", view.trace);
            println!();
            println!("{}", "Console".bold().underline());
            if view.console.is_empty() {
                println!("{}", "(nothing printed)".dimmed());
            } else {
                println!("{}", view.console.green());
            }
            if self.show_counter {
                println!();
                println!("{} {}", "Counter:".bold(), view.counter.yellow());
            }
        }
    }

    fn error(&mut self, kind: LessonKind, message: &str) {
        eprintln!("{} {}", format!("{}:", kind).red().bold(), message.red());
    }

    fn highlight(&mut self, kind: LessonKind, part: Option<LoopPart>) {
        log::debug!("highlight: {} {:?}", kind, part);
        println!("{} {}", format!("{}", kind).dimmed(), part_label(part));
    }
}
