//! Specification map parsing.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use super::{SeparatorStyle, SpecOptions};
use crate::types::SpecificationMap;

/// The rule that produced a [`SpecificationMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecBranch {
    JsonObject,
    Pairs,
    Note,
}

impl fmt::Display for SpecBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecBranch::JsonObject => write!(f, "json_object"),
            SpecBranch::Pairs => write!(f, "pairs"),
            SpecBranch::Note => write!(f, "note"),
        }
    }
}

struct SpecRule {
    branch: SpecBranch,
    applies: fn(&str) -> bool,
    transform: fn(&str, &SpecOptions) -> Option<SpecificationMap>,
}

const SPEC_RULES: &[SpecRule] = &[
    SpecRule {
        branch: SpecBranch::JsonObject,
        applies: looks_like_json_object,
        transform: from_json_object,
    },
    SpecRule {
        branch: SpecBranch::Pairs,
        applies: any_text,
        transform: from_pairs,
    },
    SpecRule {
        branch: SpecBranch::Note,
        applies: has_text,
        transform: into_note,
    },
];

/// Parse free text into a specification map using `:` separators and the
/// default `note` fallback key.
pub fn parse_specifications(raw: &str) -> SpecificationMap {
    parse_specifications_with(raw, &SpecOptions::default())
}

/// Parse free text into a specification map.
///
/// Never fails. Non-blank text that yields no pairs is preserved whole under
/// [`SpecOptions::fallback_key`].
pub fn parse_specifications_with(raw: &str, options: &SpecOptions) -> SpecificationMap {
    parse_specifications_traced(raw, options).0
}

/// [`parse_specifications_with`], also reporting which rule produced the map.
///
/// The branch is `None` when no rule matched (empty or blank input).
pub fn parse_specifications_traced(
    raw: &str,
    options: &SpecOptions,
) -> (SpecificationMap, Option<SpecBranch>) {
    if raw.is_empty() {
        return (SpecificationMap::new(), None);
    }

    for rule in SPEC_RULES {
        if !(rule.applies)(raw) {
            continue;
        }
        if let Some(map) = (rule.transform)(raw, options) {
            tracing::debug!(branch = %rule.branch, count = map.len(), "specifications parsed");
            return (map, Some(rule.branch));
        }
        tracing::debug!(branch = %rule.branch, "specifications rule fell through");
    }

    (SpecificationMap::new(), None)
}

/// Collect every `key<sep>value` line of `raw`.
///
/// Lines without a separator, or with an empty key or value, are skipped.
/// No fallback entry is produced, so the result may be empty.
pub fn parse_spec_pairs(raw: &str, separators: SeparatorStyle) -> SpecificationMap {
    raw.lines()
        .filter_map(|line| split_spec_line(line, separators))
        .collect()
}

/// Split one line into a trimmed `(key, value)` pair.
///
/// Only the chosen separator splits the line; any later separators stay in
/// the value, so `Time: 10:30am` yields `("Time", "10:30am")`.
pub fn split_spec_line(line: &str, separators: SeparatorStyle) -> Option<(&str, &str)> {
    let line = line.trim();
    let at = separator_index(line, separators)?;
    // Every separator is a single ASCII byte.
    let key = line[..at].trim();
    let value = line[at + 1..].trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

fn separator_index(line: &str, separators: SeparatorStyle) -> Option<usize> {
    if let Some(colon) = line.find(':') {
        return Some(colon);
    }
    match separators {
        SeparatorStyle::ColonOnly => None,
        SeparatorStyle::Lenient => match (line.find('-'), line.find('=')) {
            (Some(dash), Some(equals)) => Some(dash.max(equals)),
            (dash, equals) => dash.or(equals),
        },
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

fn looks_like_json_object(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.starts_with('{') && trimmed.ends_with('}')
}

fn any_text(_raw: &str) -> bool {
    true
}

fn has_text(raw: &str) -> bool {
    !raw.trim().is_empty()
}

fn from_json_object(raw: &str, _options: &SpecOptions) -> Option<SpecificationMap> {
    match serde_json::from_str::<Map<String, Value>>(raw.trim()) {
        Ok(object) => Some(object.into_iter().collect()),
        Err(err) => {
            tracing::debug!(error = %err, "specifications: braced input is not a JSON object");
            None
        }
    }
}

fn from_pairs(raw: &str, options: &SpecOptions) -> Option<SpecificationMap> {
    let map = parse_spec_pairs(raw, options.separators);
    (!map.is_empty()).then_some(map)
}

fn into_note(raw: &str, options: &SpecOptions) -> Option<SpecificationMap> {
    let mut map = SpecificationMap::new();
    map.insert(&options.fallback_key, raw.trim());
    Some(map)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn as_json(map: &SpecificationMap) -> Value {
        serde_json::to_value(map).unwrap()
    }

    #[rstest]
    #[case::json(r#"{"Capacity":"380L"}"#, SpecBranch::JsonObject)]
    #[case::pairs("Color: Silver", SpecBranch::Pairs)]
    #[case::note("plain prose", SpecBranch::Note)]
    #[case::broken_json_with_colon("{Color: Silver}", SpecBranch::Pairs)]
    #[case::broken_json_prose("{oops}", SpecBranch::Note)]
    fn picks_expected_branch(#[case] raw: &str, #[case] expected: SpecBranch) {
        let (_, branch) = parse_specifications_traced(raw, &SpecOptions::default());
        assert_eq!(branch, Some(expected));
    }

    #[test]
    fn blank_input_is_empty_without_note() {
        let (map, branch) = parse_specifications_traced(" \n\t ", &SpecOptions::default());
        assert!(map.is_empty());
        assert_eq!(branch, None);
    }

    #[test]
    fn json_values_pass_through() {
        let map = parse_specifications(r#"{"Doors": 2, " Color ": "Red", "": "x"}"#);
        assert_eq!(as_json(&map), json!({ "Doors": 2, "Color": "Red" }));
    }

    #[test]
    fn empty_json_object_is_an_empty_map() {
        let (map, branch) = parse_specifications_traced("{}", &SpecOptions::default());
        assert!(map.is_empty());
        assert_eq!(branch, Some(SpecBranch::JsonObject));
    }

    #[test]
    fn only_first_colon_splits() {
        let map = parse_specifications("Time: 10:30am\nRatio: 16:9:1");
        assert_eq!(as_json(&map), json!({ "Time": "10:30am", "Ratio": "16:9:1" }));
    }

    #[test]
    fn lines_with_empty_key_or_value_are_skipped() {
        let map = parse_specifications(": orphan\nColor:\nWeight: 40kg");
        assert_eq!(as_json(&map), json!({ "Weight": "40kg" }));
    }

    #[test]
    fn duplicate_keys_keep_last_value() {
        let map = parse_specifications("Color: Red\nColor: Blue");
        assert_eq!(as_json(&map), json!({ "Color": "Blue" }));
    }

    #[test]
    fn fallback_key_is_configurable() {
        let options = SpecOptions {
            fallback_key: "notes".to_string(),
            ..SpecOptions::default()
        };
        let map = parse_specifications_with("  hand written  ", &options);
        assert_eq!(as_json(&map), json!({ "notes": "hand written" }));
    }

    #[rstest]
    #[case::colon("Color: Red", Some(("Color", "Red")))]
    #[case::dash("Color - Red", Some(("Color", "Red")))]
    #[case::equals("Color = Red", Some(("Color", "Red")))]
    #[case::colon_beats_dash("Range: 5-10", Some(("Range", "5-10")))]
    #[case::rightmost_of_first_dash_and_equals("Voltage = 220-240V", Some(("Voltage = 220", "240V")))]
    #[case::dash_first_then_equals("Mode - a=b", Some(("Mode - a", "b")))]
    #[case::no_separator("Just words", None)]
    #[case::empty_value("Color -", None)]
    fn lenient_separator_selection(#[case] line: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(split_spec_line(line, SeparatorStyle::Lenient), expected);
    }

    #[test]
    fn colon_only_ignores_dash_and_equals() {
        assert_eq!(split_spec_line("Color - Red", SeparatorStyle::ColonOnly), None);
        assert_eq!(split_spec_line("Color = Red", SeparatorStyle::ColonOnly), None);
    }

    #[test]
    fn lenient_options_parse_dash_lines() {
        let map = parse_specifications_with("Color - Red\nSize = XL", &SpecOptions::lenient());
        assert_eq!(as_json(&map), json!({ "Color": "Red", "Size": "XL" }));
    }
}
