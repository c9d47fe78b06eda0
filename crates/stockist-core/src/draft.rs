//! Product draft — the features and specifications being composed for one
//! product in the admin tool.
//!
//! The draft is an ordinary value owned by whoever handles the form. Bulk
//! pastes and single entries accumulate into it; [`ProductDraft::clear`]
//! resets it before the next product.

use serde::Serialize;

use crate::normalizer::{parse_features, parse_spec_pairs, split_spec_line, SeparatorStyle};
use crate::types::{FeatureList, SpecificationMap};

/// Accumulated features and specifications for one product.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductDraft {
    features: FeatureList,
    specifications: SpecificationMap,
}

/// Canonical text for both collections, as placed into form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftFields {
    pub features: String,
    pub specifications: String,
}

impl ProductDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-paste features. Entries already in the draft are skipped.
    ///
    /// Returns how many features were added.
    pub fn add_features(&mut self, raw: &str) -> usize {
        let added = parse_features(raw)
            .into_iter()
            .filter(|feature| self.add_feature(feature))
            .count();
        tracing::debug!(added, total = self.features.len(), "draft: features pasted");
        added
    }

    /// Add one feature. Returns `false` for blank text or a duplicate.
    pub fn add_feature(&mut self, feature: &str) -> bool {
        if self.features.contains(feature) {
            return false;
        }
        self.features.push(feature)
    }

    pub fn remove_feature(&mut self, index: usize) -> Option<String> {
        self.features.remove(index)
    }

    /// Bulk-paste specifications using `:`, `-` or `=` separators.
    ///
    /// Lines without a separator are skipped; no fallback note is kept in a
    /// draft. Returns how many entries were inserted or overwritten.
    pub fn add_specifications(&mut self, raw: &str) -> usize {
        let pairs = parse_spec_pairs(raw, SeparatorStyle::Lenient);
        let added = pairs.len();
        self.specifications.extend(pairs);
        tracing::debug!(added, total = self.specifications.len(), "draft: specifications pasted");
        added
    }

    /// Add one specification, overwriting any previous value for the key.
    ///
    /// Returns `false` when the key or value is blank.
    pub fn add_specification(&mut self, key: &str, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() {
            return false;
        }
        self.specifications.insert(key, value)
    }

    /// Add one specification typed as a single `key: value` line.
    pub fn add_specification_line(&mut self, line: &str) -> bool {
        match split_spec_line(line, SeparatorStyle::Lenient) {
            Some((key, value)) => self.add_specification(key, value),
            None => false,
        }
    }

    pub fn remove_specification(&mut self, key: &str) -> bool {
        self.specifications.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.features.clear();
        self.specifications.clear();
    }

    pub fn features(&self) -> &FeatureList {
        &self.features
    }

    pub fn specifications(&self) -> &SpecificationMap {
        &self.specifications
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty() && self.specifications.is_empty()
    }

    /// Canonical text of both collections. Parsing the text again yields the
    /// same features and specifications.
    pub fn to_form_fields(&self) -> DraftFields {
        DraftFields {
            features: self.features.to_text(),
            specifications: self.specifications.to_text(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
