//! Symbolic derivation of the counter values a loop visits.

use log::debug;

use crate::domain::Comparator;
use crate::error::{LessonError, ParseResult};

/// Hard limit on symbolically executed iterations
pub const GUARD_CAP: usize = 200;

/// Values the body runs with, plus the counter value at loop exit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub values: Vec<i64>,
    pub next: i64,
}

/// Walk from `start` by `step` while `comparator` holds against `end`.
///
/// Fails with `TooManyIterations` once more than `GUARD_CAP` values would be
/// collected, or if the counter overflows before the condition fails.
pub fn derive_counter_values(start: i64, end: i64, comparator: Comparator, step: i64) -> ParseResult<Sequence> {
    let mut values = Vec::new();
    let mut current = start;

    while comparator.holds(current, end) {
        if values.len() == GUARD_CAP {
            debug!("derive_counter_values: guard cap hit at {}", current);
            return Err(LessonError::TooManyIterations);
        }
        values.push(current);
        current = current.checked_add(step).ok_or(LessonError::TooManyIterations)?;
    }

    debug!(
        "derive_counter_values: {} values from {} {} {} by {}, next {}",
        values.len(),
        start,
        comparator,
        end,
        step,
        current
    );
    Ok(Sequence { values, next: current })
}
