//! Bulk text normalizer — turns operator-entered text into a
//! [`FeatureList`](crate::FeatureList) or a
//! [`SpecificationMap`](crate::SpecificationMap).
//!
//! Both parsers are an ordered chain of rules. Each rule has a predicate and a
//! transform; rules are tried in order and the first rule whose predicate
//! matches *and* whose transform yields a value wins. A transform that yields
//! nothing (JSON-shaped input that is not valid JSON) hands the input to the
//! next rule.
//!
//! | Parser | Rule order |
//! |--------|-----------|
//! | features | JSON array → newline list → comma list → single value |
//! | specifications | JSON object → `key: value` lines → fallback note |
//!
//! Neither parser can fail: malformed input always resolves to one of the
//! fallbacks above.

mod features;
mod specifications;

pub use features::{parse_features, parse_features_traced, FeatureBranch};
pub use specifications::{
    parse_spec_pairs, parse_specifications, parse_specifications_traced,
    parse_specifications_with, split_spec_line, SpecBranch,
};

use crate::config::NormalizerConfig;

/// Key of the single-entry map produced when specification text holds no
/// recognizable pairs.
pub const DEFAULT_FALLBACK_KEY: &str = "note";

/// Which characters separate a specification key from its value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SeparatorStyle {
    /// Only the first `:` on a line.
    #[default]
    ColonOnly,
    /// `:` when present; otherwise the rightmost of the first `-` and the
    /// first `=` on the line. Used by the interactive draft paths.
    Lenient,
}

/// Options for [`parse_specifications_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecOptions {
    pub separators: SeparatorStyle,
    /// Key under which unstructured text is preserved.
    pub fallback_key: String,
}

impl Default for SpecOptions {
    fn default() -> Self {
        Self {
            separators: SeparatorStyle::ColonOnly,
            fallback_key: DEFAULT_FALLBACK_KEY.to_string(),
        }
    }
}

impl SpecOptions {
    pub fn lenient() -> Self {
        Self {
            separators: SeparatorStyle::Lenient,
            ..Self::default()
        }
    }

    pub fn with_separators(mut self, separators: SeparatorStyle) -> Self {
        self.separators = separators;
        self
    }
}

impl From<&NormalizerConfig> for SpecOptions {
    fn from(config: &NormalizerConfig) -> Self {
        Self {
            separators: SeparatorStyle::ColonOnly,
            fallback_key: config.fallback_key.clone(),
        }
    }
}
