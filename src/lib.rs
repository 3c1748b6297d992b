//! looplab - step through `for`, `while` and `forEach` loops one event at a time
//!
//! A lesson is four text fragments (start, condition, step, body). looplab
//! parses them with a deliberately tiny grammar, symbolically executes the
//! loop under a 200-iteration guard cap, and produces the ordered highlight,
//! trace, console and counter events a presenter plays back.

pub mod domain;
pub mod error;
pub mod executor;
pub mod grammar;
pub mod lessons;
pub mod parser;
pub mod session;
pub mod template;

pub use error::{LessonError, ParseResult};
