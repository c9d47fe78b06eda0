//! Domain-specific assertion macros and helpers for stockist harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that name the raw
//! operator input, which is what you need to reproduce a failure.

use stockist_core::{FeatureList, SpecificationMap};

/// Assert that parsing `raw` as features yields exactly `expected`.
///
/// ```rust
/// assert_features!("Red, Blue", ["Red", "Blue"]);
/// ```
#[macro_export]
macro_rules! assert_features {
    ($raw:expr, [$($item:expr),* $(,)?]) => {{
        let raw: &str = $raw;
        let expected: Vec<&str> = vec![$($item),*];
        let actual = stockist_core::parse_features(raw).into_vec();
        pretty_assertions::assert_eq!(actual, expected, "features parsed from {:?}", raw);
    }};
}

/// Assert that parsing `raw` as specifications yields exactly the JSON
/// object `expected`.
///
/// ```rust
/// assert_specs!("Color: Red", { "Color": "Red" });
/// ```
#[macro_export]
macro_rules! assert_specs {
    ($raw:expr, $($expected:tt)+) => {{
        let raw: &str = $raw;
        let actual = serde_json::to_value(stockist_core::parse_specifications(raw))
            .expect("SpecificationMap always serializes");
        pretty_assertions::assert_eq!(
            actual,
            serde_json::json!($($expected)+),
            "specifications parsed from {:?}",
            raw
        );
    }};
}

/// Assert the [`FeatureList`] invariant: every entry trimmed and non-empty.
pub fn assert_canonical_features(features: &FeatureList, raw: &str) {
    for feature in features {
        assert!(!feature.is_empty(), "empty feature parsed from {raw:?}");
        assert_eq!(
            feature.trim(),
            feature,
            "untrimmed feature {feature:?} parsed from {raw:?}"
        );
    }
}

/// Assert the [`SpecificationMap`] invariant: every key trimmed and
/// non-empty.
pub fn assert_canonical_specs(specs: &SpecificationMap, raw: &str) {
    for key in specs.keys() {
        assert!(!key.is_empty(), "empty key parsed from {raw:?}");
        assert_eq!(key.trim(), key, "untrimmed key {key:?} parsed from {raw:?}");
    }
}
