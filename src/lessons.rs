//! Lesson catalogue: default fragments, titles and part explanations.

use crate::domain::{LessonKind, LessonTexts, LoopPart};

/// Fragments a lesson is reset to
pub fn default_texts(kind: LessonKind) -> LessonTexts {
    match kind {
        LessonKind::For | LessonKind::While => {
            LessonTexts::new("let i = 1", "i <= 5", "i = i + 1", r#"console.log("Loop number", i);"#)
        }
        LessonKind::ForEach => LessonTexts::new(
            "const values = [2, 4, 6];",
            "for (const value of values)",
            "move to the next item",
            r#"console.log("Value", value);"#,
        ),
    }
}

/// Heading shown above a lesson
pub fn title(kind: LessonKind) -> &'static str {
    match kind {
        LessonKind::For => "The for loop",
        LessonKind::While => "The while loop",
        LessonKind::ForEach => "Looping over an array",
    }
}

/// What a part does in a lesson, shown when the part is selected
pub fn explain(kind: LessonKind, part: LoopPart) -> &'static str {
    match (kind, part) {
        (LessonKind::For, LoopPart::Start) => "Runs once before anything else and creates the counter.",
        (LessonKind::For, LoopPart::Condition) => {
            "Checked before every iteration. The body only runs while it is true."
        }
        (LessonKind::For, LoopPart::Step) => "Runs after each body to move the counter toward the end.",
        (LessonKind::For, LoopPart::Body) => "The work repeated on every iteration.",

        (LessonKind::While, LoopPart::Start) => "A while loop has no start slot, so the counter is set up before it.",
        (LessonKind::While, LoopPart::Condition) => "The only thing inside the parentheses. Checked before every pass.",
        (LessonKind::While, LoopPart::Step) => {
            "Lives at the end of the body. Forget it and the condition never changes."
        }
        (LessonKind::While, LoopPart::Body) => "The work repeated while the condition holds.",

        (LessonKind::ForEach, LoopPart::Start) => "The array to walk through, one item at a time.",
        (LessonKind::ForEach, LoopPart::Condition) => "The loop asks for the next item until none are left.",
        (LessonKind::ForEach, LoopPart::Step) => "Moving to the next item happens automatically.",
        (LessonKind::ForEach, LoopPart::Body) => "Runs once for every item, with the item bound to a name.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::build_lesson_data;

    #[test]
    fn test_defaults_parse_for_every_lesson() {
        for kind in LessonKind::ALL {
            assert!(build_lesson_data(kind, &default_texts(kind)).is_ok(), "{kind}");
        }
    }

    #[test]
    fn test_for_defaults_visit_one_to_five() {
        let data = build_lesson_data(LessonKind::For, &default_texts(LessonKind::For)).unwrap();
        assert_eq!(data.final_counter, "i = 6");
        assert_eq!(data.console_lines.len(), 5);
    }

    #[test]
    fn test_every_part_is_explained() {
        for kind in LessonKind::ALL {
            for part in LoopPart::ALL {
                assert!(!explain(kind, part).is_empty());
            }
        }
    }

    #[test]
    fn test_titles_differ() {
        assert_ne!(title(LessonKind::For), title(LessonKind::While));
    }
}
