//! Error types for looplab
//!
//! Every parse or derivation failure surfaces as a single user-facing sentence.
//! The Display text of each variant is shown verbatim by the presentation layer.

use thiserror::Error;

use crate::domain::Comparator;

/// All the ways a lesson can fail to parse or execute
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LessonError {
    /// Start fragment did not look like `let i = 1`
    #[error("Could not read the starting value. Try something like: let i = 1")]
    UnreadableStart,

    /// Condition fragment did not compare the counter against a number
    #[error("Could not read the condition. Try something like: i <= 5")]
    UnreadableCondition,

    /// Step fragment did not look like `i = i + 1`
    #[error("Could not read the step. Try something like: i = i + 1")]
    UnreadableStep,

    /// Step magnitude was zero
    #[error("The step must change the counter.")]
    ZeroStep,

    /// Step direction contradicts the comparison
    #[error("A {0} comparison needs a {dir} step.", dir = .0.required_direction())]
    StepDirection(Comparator),

    /// Derived sequence exceeded the guard cap
    #[error("This loop would run too many times. Adjust the numbers.")]
    TooManyIterations,

    /// No `[...]` span in the start fragment
    #[error("Could not read the array. Try something like: [2, 4, 6]")]
    UnreadableArray,

    /// Brackets held nothing but commas and whitespace
    #[error("Add at least one number inside the brackets.")]
    EmptyArray,

    /// An array item was not a finite number
    #[error("Only numbers are supported inside the array.")]
    NotANumber,
}

/// Result type alias for every fallible parse or derivation stage
pub type ParseResult<T> = std::result::Result<T, LessonError>;
