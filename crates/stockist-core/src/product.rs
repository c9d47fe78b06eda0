//! Product form boundary.
//!
//! A [`ProductForm`] holds the plain fields of a create/update submission
//! exactly as received. [`ProductForm::normalize`] validates the required
//! fields, runs the `features` and `specifications` text through the
//! normalizer and returns the [`NormalizedProduct`] handed to storage and
//! echoed back to the client.

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::normalizer::{parse_features, parse_specifications_with, SpecOptions};
use crate::types::{FeatureList, SpecificationMap};

/// Fields that must be present and non-blank, in the order they are reported.
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "category", "price"];

/// Raw product form fields. Every field is optional text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub old_price: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub features: Option<String>,
    #[serde(default)]
    pub specifications: Option<String>,
}

/// The record persisted for a product, minus storage-assigned columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProduct {
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub price: f64,
    pub old_price: Option<f64>,
    pub description: String,
    pub features: FeatureList,
    pub specifications: SpecificationMap,
}

impl ProductForm {
    /// Validate and normalize the form.
    ///
    /// An unparsable `price` becomes `0.0`; an unparsable `old_price` is
    /// dropped. Neither is an error.
    pub fn normalize(&self, options: &SpecOptions) -> Result<NormalizedProduct, FormError> {
        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .into_iter()
            .zip([&self.name, &self.category, &self.price])
            .filter(|(_, value)| trimmed(value).is_empty())
            .map(|(field, _)| field)
            .collect();
        if !missing.is_empty() {
            return Err(FormError::MissingFields { missing });
        }

        let features = parse_features(self.features.as_deref().unwrap_or_default());
        let specifications =
            parse_specifications_with(self.specifications.as_deref().unwrap_or_default(), options);

        Ok(NormalizedProduct {
            name: trimmed(&self.name).to_string(),
            category: trimmed(&self.category).to_string(),
            subcategory: trimmed(&self.subcategory).to_string(),
            price: parse_price(trimmed(&self.price)).unwrap_or(0.0),
            old_price: parse_price(trimmed(&self.old_price)),
            description: trimmed(&self.description).to_string(),
            features,
            specifications,
        })
    }

    /// The required fields as received, for echoing back in a rejection.
    pub fn required_echo(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "category": self.category,
            "price": self.price,
        })
    }
}

fn trimmed(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or_default()
}

/// Parse a non-negative, finite price. Accepts a leading currency symbol.
fn parse_price(text: &str) -> Option<f64> {
    let text = text.trim_start_matches(['$', '£', '€']).trim();
    text.parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn form(name: &str, category: &str, price: &str) -> ProductForm {
        ProductForm {
            name: Some(name.to_string()),
            category: Some(category.to_string()),
            price: Some(price.to_string()),
            ..ProductForm::default()
        }
    }

    #[test]
    fn reports_every_missing_field_in_order() {
        let err = ProductForm {
            category: Some("  ".to_string()),
            ..ProductForm::default()
        }
        .normalize(&SpecOptions::default())
        .unwrap_err();
        assert_eq!(
            err,
            FormError::MissingFields {
                missing: vec!["name", "category", "price"]
            }
        );
        assert_eq!(err.to_string(), "Missing required fields: name, category, price");
    }

    #[test]
    fn optional_text_defaults_to_empty() {
        let product = form(" Fridge ", "Appliances", "499.99")
            .normalize(&SpecOptions::default())
            .unwrap();
        assert_eq!(product.name, "Fridge");
        assert_eq!(product.subcategory, "");
        assert_eq!(product.description, "");
        assert_eq!(product.old_price, None);
        assert!(product.features.is_empty());
        assert!(product.specifications.is_empty());
    }

    #[rstest]
    #[case::plain("120", Some(120.0))]
    #[case::currency("$ 99.50", Some(99.5))]
    #[case::words("call us", None)]
    #[case::negative("-5", None)]
    #[case::infinite("inf", None)]
    fn price_parsing(#[case] text: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_price(text), expected);
    }

    #[test]
    fn unparsable_price_becomes_zero() {
        let product = form("Fan", "Appliances", "ask")
            .normalize(&SpecOptions::default())
            .unwrap();
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn text_fields_are_normalized() {
        let mut input = form("Freezer", "Appliances", "300");
        input.features = Some("• Frost free\n• A+ rated".to_string());
        input.specifications = Some("Capacity: 380 Liters".to_string());
        let product = input.normalize(&SpecOptions::default()).unwrap();
        assert_eq!(product.features.into_vec(), vec!["Frost free", "A+ rated"]);
        assert_eq!(product.specifications.get_str("Capacity"), Some("380 Liters"));
    }
}
