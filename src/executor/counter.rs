//! Playback for counting lessons.

use log::debug;
use std::collections::HashMap;

use crate::domain::{CounterConfig, LessonData, LessonEvent, LessonKind, LoopPart};
use crate::template::format_console_statement;

/// Wording that differs between a `for` and a `while` lesson
struct Labels {
    start: &'static str,
    step: &'static str,
}

fn labels(kind: LessonKind) -> Labels {
    match kind {
        LessonKind::While => Labels {
            start: "Before the loop",
            step: "Update",
        },
        _ => Labels {
            start: "Start",
            step: "Step",
        },
    }
}

/// Build the ordered event list for a validated counting loop.
///
/// Layout: one start event; condition/body/step per visited value; a failing
/// condition check; a terminal event with nothing highlighted.
pub fn build_counter_lesson_data(kind: LessonKind, config: &CounterConfig) -> LessonData {
    let labels = labels(kind);
    let var = config.variable.as_str();
    let texts = &config.texts;
    let counter = |value: i64| format!("{} = {}", var, value);
    let check = |value: i64, verdict: &str| {
        format!(
            "Check {} {} {} with {} = {} -> {}",
            var, config.comparator, config.end, var, value, verdict
        )
    };

    let mut events = Vec::with_capacity(config.values.len() * 3 + 3);
    events.push(
        LessonEvent::at(LoopPart::Start)
            .with_trace(format!("{}: {} sets {}", labels.start, texts.start, counter(config.start)))
            .with_counter(counter(config.start)),
    );

    for (index, &value) in config.values.iter().enumerate() {
        events.push(
            LessonEvent::at(LoopPart::Condition)
                .with_trace(check(value, "yes"))
                .with_counter(counter(value)),
        );

        let bindings = HashMap::from([(config.variable.clone(), value.to_string())]);
        events.push(
            LessonEvent::at(LoopPart::Body)
                .with_trace(format!(
                    "Body (iteration {}): run {} with {}",
                    index + 1,
                    texts.body,
                    counter(value)
                ))
                .with_console(format_console_statement(&texts.body, &bindings))
                .with_counter(counter(value)),
        );

        let next = value + config.step;
        events.push(
            LessonEvent::at(LoopPart::Step)
                .with_trace(format!("{}: {} makes {}", labels.step, texts.step, counter(next)))
                .with_counter(counter(next)),
        );
    }

    let final_counter = counter(config.next_value);
    events.push(
        LessonEvent::at(LoopPart::Condition)
            .with_trace(check(config.next_value, "no"))
            .with_counter(final_counter.clone()),
    );
    events.push(
        LessonEvent::finished()
            .with_trace(format!("Loop finished with {}", final_counter))
            .with_counter(final_counter.clone()),
    );

    debug!("build_counter_lesson_data: {} {} events", kind, events.len());
    LessonData::from_events(events, final_counter)
}
