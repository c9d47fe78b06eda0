//! Feature list parsing.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::types::FeatureList;

static BULLETS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[•\-*\s]+$").expect("bullet-only pattern must compile"));

static LEADING_BULLETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[•\-*\s]+").expect("leading-bullet pattern must compile"));

/// The rule that produced a [`FeatureList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureBranch {
    JsonArray,
    Lines,
    Commas,
    Single,
}

impl fmt::Display for FeatureBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureBranch::JsonArray => write!(f, "json_array"),
            FeatureBranch::Lines => write!(f, "lines"),
            FeatureBranch::Commas => write!(f, "commas"),
            FeatureBranch::Single => write!(f, "single"),
        }
    }
}

struct FeatureRule {
    branch: FeatureBranch,
    applies: fn(&str) -> bool,
    transform: fn(&str) -> Option<FeatureList>,
}

const FEATURE_RULES: &[FeatureRule] = &[
    FeatureRule {
        branch: FeatureBranch::JsonArray,
        applies: looks_like_json_array,
        transform: from_json_array,
    },
    FeatureRule {
        branch: FeatureBranch::Lines,
        applies: has_newline,
        transform: from_lines,
    },
    FeatureRule {
        branch: FeatureBranch::Commas,
        applies: has_comma,
        transform: from_commas,
    },
    FeatureRule {
        branch: FeatureBranch::Single,
        applies: has_text,
        transform: from_single,
    },
];

/// Parse free text into a feature list.
///
/// Never fails; input that matches no rule yields an empty list.
pub fn parse_features(raw: &str) -> FeatureList {
    parse_features_traced(raw).0
}

/// [`parse_features`], also reporting which rule produced the list.
///
/// The branch is `None` when no rule matched (empty or blank input).
pub fn parse_features_traced(raw: &str) -> (FeatureList, Option<FeatureBranch>) {
    if raw.is_empty() {
        return (FeatureList::new(), None);
    }

    for rule in FEATURE_RULES {
        if !(rule.applies)(raw) {
            continue;
        }
        if let Some(list) = (rule.transform)(raw) {
            tracing::debug!(branch = %rule.branch, count = list.len(), "features parsed");
            return (list, Some(rule.branch));
        }
        tracing::debug!(branch = %rule.branch, "features rule fell through");
    }

    (FeatureList::new(), None)
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

fn looks_like_json_array(raw: &str) -> bool {
    let trimmed = raw.trim();
    trimmed.starts_with('[') && trimmed.ends_with(']')
}

fn has_newline(raw: &str) -> bool {
    raw.contains('\n')
}

fn has_comma(raw: &str) -> bool {
    raw.contains(',')
}

fn has_text(raw: &str) -> bool {
    !raw.trim().is_empty()
}

// ---------------------------------------------------------------------------
// Transforms
// ---------------------------------------------------------------------------

fn from_json_array(raw: &str) -> Option<FeatureList> {
    let items = match serde_json::from_str::<Vec<Value>>(raw.trim()) {
        Ok(items) => items,
        Err(err) => {
            tracing::debug!(error = %err, "features: bracketed input is not a JSON array");
            return None;
        }
    };

    let mut list = FeatureList::new();
    for item in items {
        match item {
            Value::String(text) => {
                list.push(&text);
            }
            Value::Number(number) => {
                list.push(&number.to_string());
            }
            Value::Bool(flag) => {
                list.push(&flag.to_string());
            }
            Value::Null => {}
            Value::Array(_) | Value::Object(_) => {
                tracing::debug!("features: JSON array holds nested values");
                return None;
            }
        }
    }
    Some(list)
}

fn from_lines(raw: &str) -> Option<FeatureList> {
    Some(
        raw.split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty() && !BULLETS_ONLY.is_match(line))
            .map(|line| LEADING_BULLETS.replace(line, ""))
            .collect(),
    )
}

fn from_commas(raw: &str) -> Option<FeatureList> {
    Some(raw.split(',').collect())
}

fn from_single(raw: &str) -> Option<FeatureList> {
    Some(std::iter::once(raw).collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
