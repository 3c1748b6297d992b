//! Statement templater
//!
//! Reproduces what a single logging statement such as `console.log("Hi", i)`
//! would print once its variables are bound, without a language runtime.
//! Only literals, bound identifiers and `<ident> +/- <number>` are evaluated;
//! anything else gets whole-word identifier substitution.

mod args;

pub use args::split_top_level_args;

use regex::{NoExpand, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Output for a blank statement
pub const NO_CONSOLE_OUTPUT: &str = "(no console output)";

static CALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^[A-Za-z_$][A-Za-z0-9_$.]*\s*\((.*)\)\s*;?$").expect("call pattern"));

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?\d+(?:\.\d+)?$").expect("number pattern"));

static BINARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z_$][A-Za-z0-9_$]*)\s*([+-])\s*(\d+(?:\.\d+)?)$").expect("binary pattern")
});

/// Render `template` with every identifier in `replacements` bound to its value.
pub fn format_console_statement(template: &str, replacements: &HashMap<String, String>) -> String {
    let trimmed = template.trim();
    if trimmed.is_empty() {
        return NO_CONSOLE_OUTPUT.to_string();
    }

    let Some(caps) = CALL_RE.captures(trimmed) else {
        return substitute_identifiers(trimmed, replacements);
    };

    let rendered: Vec<String> = split_top_level_args(&caps[1])
        .iter()
        .map(|token| evaluate_argument(token, replacements))
        .filter(|value| !value.is_empty())
        .collect();

    if rendered.is_empty() {
        substitute_identifiers(trimmed, replacements)
    } else {
        rendered.join(" ")
    }
}

/// Evaluate one argument token the way a console would print it
fn evaluate_argument(token: &str, replacements: &HashMap<String, String>) -> String {
    let token = token.trim();
    if token.is_empty() {
        return String::new();
    }

    if let Some(inner) = quoted(token, '"').or_else(|| quoted(token, '\'')) {
        return inner.to_string();
    }
    if let Some(inner) = quoted(token, '`') {
        return substitute_identifiers(inner, replacements);
    }
    if NUMBER_RE.is_match(token) {
        return token.to_string();
    }
    if let Some(value) = replacements.get(token) {
        return value.clone();
    }
    if let Some(value) = evaluate_binary(token, replacements) {
        return value;
    }
    substitute_identifiers(token, replacements)
}

/// `<ident> (+|-) <number>` where the identifier is bound to a finite number
fn evaluate_binary(token: &str, replacements: &HashMap<String, String>) -> Option<String> {
    let caps = BINARY_RE.captures(token)?;
    let base: f64 = replacements.get(&caps[1])?.trim().parse().ok()?;
    if !base.is_finite() {
        return None;
    }
    let operand: f64 = caps[3].parse().ok()?;
    let result = if &caps[2] == "+" { base + operand } else { base - operand };
    Some(format_number(result))
}

fn quoted(token: &str, quote: char) -> Option<&str> {
    if token.len() >= 2 && token.starts_with(quote) && token.ends_with(quote) {
        Some(&token[1..token.len() - 1])
    } else {
        None
    }
}

/// Replace every whole-word occurrence of each key with its value.
///
/// Keys are applied in sorted order so the output never depends on map order.
pub fn substitute_identifiers(text: &str, replacements: &HashMap<String, String>) -> String {
    let mut keys: Vec<&String> = replacements.keys().collect();
    keys.sort();

    let mut result = text.to_string();
    for key in keys {
        let Ok(re) = Regex::new(&format!(r"\b{}\b", regex::escape(key))) else {
            continue;
        };
        result = re.replace_all(&result, NoExpand(&replacements[key])).into_owned();
    }
    result
}

/// Render a number the way a JavaScript console does.
///
/// No trailing `.0`, no `-0`, and exponent form (`1e+21`, `1e-7`) outside
/// `1e-6 <= |x| < 1e21`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bind(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_string_and_identifier() {
        assert_eq!(format_console_statement(r#"console.log("Hello", i)"#, &bind(&[("i", "3")])), "Hello 3");
    }

    #[test]
    fn test_identifier_plus_number() {
        assert_eq!(format_console_statement("console.log(i + 1)", &bind(&[("i", "4")])), "5");
    }

    #[test]
    fn test_identifier_minus_decimal() {
        assert_eq!(format_console_statement("console.log(x - 0.5);", &bind(&[("x", "2")])), "1.5");
    }

    #[test]
    fn test_blank_template() {
        assert_eq!(format_console_statement("   ", &bind(&[])), NO_CONSOLE_OUTPUT);
    }

    #[test]
    fn test_not_call_shaped_falls_back_to_substitution() {
        assert_eq!(format_console_statement("total = i * 2", &bind(&[("i", "7")])), "total = 7 * 2");
    }

    #[test]
    fn test_single_quotes_verbatim() {
        assert_eq!(format_console_statement("console.log('i is', i);", &bind(&[("i", "2")])), "i is 2");
    }

    #[test]
    fn test_backtick_substitutes_whole_words() {
        assert_eq!(
            format_console_statement("console.log(`item i of items`)", &bind(&[("i", "1")])),
            "item 1 of items"
        );
    }

    #[test]
    fn test_bare_numbers_pass_through() {
        assert_eq!(format_console_statement("console.log(42, -3.5)", &bind(&[])), "42 -3.5");
    }

    #[test]
    fn test_unbound_binary_falls_through() {
        assert_eq!(format_console_statement("console.log(name + 1)", &bind(&[("i", "1")])), "name + 1");
    }

    #[test]
    fn test_float_keywords_are_not_numbers() {
        let bound = bind(&[("i", "1")]);
        assert_eq!(format_console_statement("console.log(inf + 1)", &bound), "inf + 1");
        assert_eq!(format_console_statement("console.log(Infinity - 2)", &bound), "Infinity - 2");
        assert_eq!(format_console_statement("console.log(NaN + 1)", &bound), "NaN + 1");
    }

    #[test]
    fn test_non_finite_binding_falls_through() {
        assert_eq!(format_console_statement("console.log(x + 1)", &bind(&[("x", "NaN")])), "NaN + 1");
    }

    #[test]
    fn test_non_numeric_base_falls_through() {
        assert_eq!(format_console_statement("console.log(s + 1)", &bind(&[("s", "abc")])), "abc + 1");
    }

    #[test]
    fn test_other_expressions_get_substitution() {
        assert_eq!(format_console_statement("console.log(i * 2)", &bind(&[("i", "6")])), "6 * 2");
    }

    #[test]
    fn test_empty_call_falls_back_to_template() {
        assert_eq!(format_console_statement("console.log()", &bind(&[("i", "1")])), "console.log()");
    }

    #[test]
    fn test_empty_strings_are_dropped() {
        assert_eq!(format_console_statement(r#"console.log("", i)"#, &bind(&[("i", "9")])), "9");
    }

    #[test]
    fn test_substitute_respects_word_boundaries() {
        let out = substitute_identifiers("i in items with index i", &bind(&[("i", "0")]));
        assert_eq!(out, "0 in items with index 0");
    }

    #[test]
    fn test_substitute_does_not_expand_dollar() {
        let out = substitute_identifiers("price", &bind(&[("price", "$1")]));
        assert_eq!(out, "$1");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-4.0), "-4");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_number_exponent_range() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
