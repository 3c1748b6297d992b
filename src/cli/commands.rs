//! CLI command definitions using clap.
//!
//! - run: play a whole lesson at once
//! - step: play a lesson one event at a time
//! - explain: highlight a part and describe it
//! - defaults: print the fragments a lesson resets to
//! - animate: demo walk over the four parts

use clap::{Args, Parser, Subcommand};
use looplab::domain::{LessonKind, LoopPart};
use std::path::PathBuf;

/// looplab - watch loops run one step at a time
#[derive(Parser, Debug)]
#[command(name = "looplab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Fragment overrides shared by `run` and `step`
#[derive(Args, Debug, Clone, Default)]
pub struct Fragments {
    /// YAML file with start/condition/step/body keys
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Start fragment (e.g. "let i = 1")
    #[arg(long)]
    pub start: Option<String>,

    /// Condition fragment (e.g. "i <= 5")
    #[arg(long)]
    pub condition: Option<String>,

    /// Step fragment (e.g. "i = i + 1")
    #[arg(long)]
    pub step: Option<String>,

    /// Body fragment (e.g. 'console.log("Hi", i)')
    #[arg(long)]
    pub body: Option<String>,
}

impl Fragments {
    /// Individual overrides, in part order
    pub fn overrides(&self) -> Vec<(LoopPart, &str)> {
        [
            (LoopPart::Start, &self.start),
            (LoopPart::Condition, &self.condition),
            (LoopPart::Step, &self.step),
            (LoopPart::Body, &self.body),
        ]
        .into_iter()
        .filter_map(|(part, text)| text.as_deref().map(|t| (part, t)))
        .collect()
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a lesson and print its full trace and console
    Run {
        /// Lesson: for, while or foreach
        lesson: LessonKind,

        #[command(flatten)]
        fragments: Fragments,

        /// Print the lesson data as JSON
        #[arg(long)]
        json: bool,
    },

    /// Step through a lesson one event at a time
    Step {
        /// Lesson: for, while or foreach
        lesson: LessonKind,

        #[command(flatten)]
        fragments: Fragments,

        /// Advance automatically instead of waiting for Enter
        #[arg(short, long)]
        auto: bool,
    },

    /// Highlight one part of a lesson and explain it
    Explain {
        /// Lesson: for, while or foreach
        lesson: LessonKind,

        /// Part: start, condition, step or body
        part: LoopPart,
    },

    /// Print the fragments a lesson resets to
    Defaults {
        /// Lesson: for, while or foreach
        lesson: LessonKind,
    },

    /// Play the demo animation over the four parts
    Animate {
        /// Lesson: for, while or foreach
        lesson: LessonKind,

        /// Delay between frames in milliseconds (overrides config)
        #[arg(short, long)]
        delay_ms: Option<u64>,
    },
}
