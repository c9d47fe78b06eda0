//! Test builders — ergonomic constructors for `ProductForm` fixtures.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use stockist_core::ProductForm;

/// Fluent builder for [`ProductForm`] test fixtures.
///
/// Starts from a valid form (name, category and price set).
///
/// # Example
///
/// ```rust
/// let form = ProductFormBuilder::new("Chest Freezer")
///     .price("499.99")
///     .features("• Frost free\n• A+ rated")
///     .build();
/// ```
pub struct ProductFormBuilder {
    form: ProductForm,
}

impl ProductFormBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            form: ProductForm {
                name: Some(name.into()),
                category: Some("Appliances".to_string()),
                price: Some("100".to_string()),
                ..ProductForm::default()
            },
        }
    }

    /// A form with every field empty.
    pub fn empty() -> Self {
        Self {
            form: ProductForm::default(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.form.name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.form.category = Some(category.into());
        self
    }

    pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.form.subcategory = Some(subcategory.into());
        self
    }

    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.form.price = Some(price.into());
        self
    }

    pub fn old_price(mut self, old_price: impl Into<String>) -> Self {
        self.form.old_price = Some(old_price.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.form.description = Some(description.into());
        self
    }

    pub fn features(mut self, features: impl Into<String>) -> Self {
        self.form.features = Some(features.into());
        self
    }

    pub fn specifications(mut self, specifications: impl Into<String>) -> Self {
        self.form.specifications = Some(specifications.into());
        self
    }

    pub fn build(self) -> ProductForm {
        self.form
    }

    /// The form as the JSON body of a request.
    pub fn json(self) -> String {
        serde_json::to_string(&self.form).expect("ProductForm always serializes")
    }
}
