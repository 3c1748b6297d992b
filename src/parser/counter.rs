//! Parser for counting lessons (`for` and `while`).

use log::{debug, warn};

use super::sequence::derive_counter_values;
use crate::domain::{CounterConfig, LessonTexts};
use crate::error::{LessonError, ParseResult};
use crate::grammar;

/// Message shown when the body has no quoted log text
pub const DEFAULT_COUNTER_MESSAGE: &str = "Looping is learning";

/// Validate the four fragments of a counting lesson.
///
/// Stages fail fast in order: start, condition, step, zero step, step
/// direction, sequence derivation. The body never fails; it only supplies the
/// display message.
pub fn parse_counter_config(raw: &LessonTexts) -> ParseResult<CounterConfig> {
    let texts = raw.trimmed();

    let start = grammar::match_start(&texts.start).ok_or_else(|| {
        warn!("parse_counter_config: unreadable start {:?}", texts.start);
        LessonError::UnreadableStart
    })?;
    debug!("parse_counter_config: variable {} starts at {}", start.variable, start.start);

    let condition = grammar::match_condition(&texts.condition, &start.variable).ok_or_else(|| {
        warn!("parse_counter_config: unreadable condition {:?}", texts.condition);
        LessonError::UnreadableCondition
    })?;

    let step = grammar::match_step(&texts.step, &start.variable).ok_or_else(|| {
        warn!("parse_counter_config: unreadable step {:?}", texts.step);
        LessonError::UnreadableStep
    })?;
    if step.magnitude == 0 {
        return Err(LessonError::ZeroStep);
    }

    let delta = step.delta();
    if !condition.comparator.accepts_step(delta) {
        return Err(LessonError::StepDirection(condition.comparator));
    }

    let sequence = derive_counter_values(start.start, condition.end, condition.comparator, delta)?;
    let message = grammar::extract_message(&texts.body).unwrap_or_else(|| DEFAULT_COUNTER_MESSAGE.to_string());

    Ok(CounterConfig {
        variable: start.variable,
        start: start.start,
        comparator: condition.comparator,
        end: condition.end,
        step: delta,
        values: sequence.values,
        next_value: sequence.next,
        message,
        texts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Comparator;

    fn texts(start: &str, condition: &str, step: &str, body: &str) -> LessonTexts {
        LessonTexts::new(start, condition, step, body)
    }

    fn message_of(raw: LessonTexts) -> String {
        parse_counter_config(&raw).unwrap_err().to_string()
    }

    #[test]
    fn test_default_for_fragments() {
        let config = parse_counter_config(&texts(
            "let i = 1",
            "i <= 5",
            "i = i + 1",
            r#"console.log("Loop number", i);"#,
        ))
        .unwrap();
        assert_eq!(config.variable, "i");
        assert_eq!(config.values, vec![1, 2, 3, 4, 5]);
        assert_eq!(config.next_value, 6);
        assert_eq!(config.comparator, Comparator::AtMost);
        assert_eq!(config.message, "Loop number");
    }

    #[test]
    fn test_fragments_are_trimmed_and_kept() {
        let config = parse_counter_config(&texts(" let n = 3; ", " n >= 1 ", " n = n - 1 ", "  ")).unwrap();
        assert_eq!(config.texts.start, "let n = 3;");
        assert_eq!(config.texts.step, "n = n - 1");
        assert_eq!(config.values, vec![3, 2, 1]);
        assert_eq!(config.next_value, 0);
    }

    #[test]
    fn test_missing_message_uses_placeholder() {
        let config = parse_counter_config(&texts("let i = 1", "i <= 2", "i = i + 1", "console.log(i)")).unwrap();
        assert_eq!(config.message, DEFAULT_COUNTER_MESSAGE);
    }

    #[test]
    fn test_unreadable_start() {
        let msg = message_of(texts("let i", "i <= 5", "i = i + 1", ""));
        assert!(msg.starts_with("Could not read the starting value."));
    }

    #[test]
    fn test_condition_with_other_variable() {
        let msg = message_of(texts("let i = 1", "j <= 5", "i = i + 1", ""));
        assert!(msg.starts_with("Could not read the condition."));
    }

    #[test]
    fn test_unreadable_step() {
        let msg = message_of(texts("let i = 1", "i <= 5", "i++", ""));
        assert!(msg.starts_with("Could not read the step."));
    }

    #[test]
    fn test_zero_step() {
        assert_eq!(
            message_of(texts("let i = 1", "i <= 5", "i = i + 0", "")),
            "The step must change the counter."
        );
    }

    #[test]
    fn test_sign_mismatch_counting_up() {
        assert_eq!(
            message_of(texts("let i = 1", "i <= 5", "i = i - 1", "")),
            "A <= comparison needs a positive step."
        );
    }

    #[test]
    fn test_sign_mismatch_counting_down() {
        assert_eq!(
            message_of(texts("let i = 5", "i >= 1", "i = i + 1", "")),
            "A >= comparison needs a negative step."
        );
    }

    #[test]
    fn test_runaway_loop() {
        assert_eq!(
            message_of(texts("let i = 0", "i <= 1000", "i = i + 1", "")),
            "This loop would run too many times. Adjust the numbers."
        );
    }

    #[test]
    fn test_stage_order_start_before_condition() {
        let err = parse_counter_config(&texts("nope", "nope", "nope", "")).unwrap_err();
        assert_eq!(err, LessonError::UnreadableStart);
    }

    #[test]
    fn test_stage_order_zero_step_before_direction() {
        let err = parse_counter_config(&texts("let i = 5", "i >= 1", "i = i + 0", "")).unwrap_err();
        assert_eq!(err, LessonError::ZeroStep);
    }
}
