//! CLI module for looplab - the terminal presentation layer.
//!
//! Parses arguments with clap and renders lessons through `TerminalPresenter`.

pub mod commands;
pub mod render;

pub use commands::{Cli, Commands, Fragments};
pub use render::TerminalPresenter;
