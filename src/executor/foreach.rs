//! Playback for iteration lessons.

use log::debug;
use std::collections::HashMap;

use crate::domain::{ForEachConfig, LessonData, LessonEvent, LoopPart};
use crate::template::{format_console_statement, format_number};

/// Trace used when the step fragment is blank
pub const DEFAULT_STEP_TRACE: &str = "Move on to the next item.";

/// Counter text for the iteration cursor.
///
/// `None` is before the first check. An index past the last item reads as done.
pub fn for_each_counter(index: Option<usize>, values: &[f64]) -> String {
    let Some(index) = index else {
        return "index = -- (value --)".to_string();
    };
    match values.get(index) {
        Some(&value) => format!("index = {} (value {})", index, format_number(value)),
        None => format!("index = {} (done)", index),
    }
}

/// Build the ordered event list for a validated iteration loop.
pub fn build_for_each_lesson_data(config: &ForEachConfig) -> LessonData {
    let total = config.values.len();
    let texts = &config.texts;
    let step_trace = if texts.step.is_empty() {
        DEFAULT_STEP_TRACE.to_string()
    } else {
        texts.step.clone()
    };

    let mut events = Vec::with_capacity(total * 3 + 3);
    events.push(
        LessonEvent::at(LoopPart::Start)
            .with_trace(format!(
                "Start: {} holds {} item{}",
                texts.start,
                total,
                if total == 1 { "" } else { "s" }
            ))
            .with_counter(for_each_counter(None, &config.values)),
    );

    for (index, &value) in config.values.iter().enumerate() {
        let here = for_each_counter(Some(index), &config.values);
        let shown = format_number(value);

        events.push(
            LessonEvent::at(LoopPart::Condition)
                .with_trace(format!("Check next item (index {}) -> yes", index))
                .with_counter(here.clone()),
        );

        let bindings = HashMap::from([
            (config.item_variable.clone(), shown.clone()),
            ("index".to_string(), index.to_string()),
        ]);
        events.push(
            LessonEvent::at(LoopPart::Body)
                .with_trace(format!(
                    "Body (item {}): run {} with {} = {}",
                    index + 1,
                    texts.body,
                    config.item_variable,
                    shown
                ))
                .with_console(format_console_statement(&texts.body, &bindings))
                .with_counter(here),
        );

        events.push(
            LessonEvent::at(LoopPart::Step)
                .with_trace(step_trace.clone())
                .with_counter(for_each_counter(Some(index + 1), &config.values)),
        );
    }

    let final_counter = for_each_counter(Some(total), &config.values);
    events.push(
        LessonEvent::at(LoopPart::Condition)
            .with_trace(format!("Check next item (index {}) -> no (array finished)", total))
            .with_counter(final_counter.clone()),
    );
    events.push(
        LessonEvent::finished()
            .with_trace(format!("Loop finished after {} item{}", total, if total == 1 { "" } else { "s" }))
            .with_counter(final_counter.clone()),
    );

    debug!("build_for_each_lesson_data: {} events", events.len());
    LessonData::from_events(events, final_counter)
}
