//! Parser for iteration lessons over an array literal.

use log::{debug, warn};

use crate::domain::{ForEachConfig, LessonTexts};
use crate::error::{LessonError, ParseResult};
use crate::grammar;

/// Message shown when the body has no quoted log text
pub const DEFAULT_FOR_EACH_MESSAGE: &str = "Value";

/// Binding the body sees when the condition does not name one
pub const DEFAULT_ITEM_VARIABLE: &str = "value";

/// Validate an iteration lesson: an array literal in the start fragment and a body.
pub fn parse_for_each_config(raw: &LessonTexts) -> ParseResult<ForEachConfig> {
    let texts = raw.trimmed();

    let inner = grammar::match_array(&texts.start).ok_or_else(|| {
        warn!("parse_for_each_config: no array in {:?}", texts.start);
        LessonError::UnreadableArray
    })?;

    let items: Vec<&str> = inner.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
    if items.is_empty() {
        return Err(LessonError::EmptyArray);
    }

    let values = items
        .iter()
        .map(|item| parse_number(item))
        .collect::<ParseResult<Vec<f64>>>()?;
    debug!("parse_for_each_config: {} items", values.len());

    let message = grammar::extract_message(&texts.body).unwrap_or_else(|| DEFAULT_FOR_EACH_MESSAGE.to_string());
    let item_variable =
        grammar::match_item_variable(&texts.condition).unwrap_or_else(|| DEFAULT_ITEM_VARIABLE.to_string());

    Ok(ForEachConfig {
        values,
        message,
        item_variable,
        texts,
    })
}

fn parse_number(item: &str) -> ParseResult<f64> {
    match item.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => {
            warn!("parse_for_each_config: not a number {:?}", item);
            Err(LessonError::NotANumber)
        }
    }
}
