//! stockist-core — product text normalization for the storefront.
//!
//! This crate holds everything that touches operator-entered product text:
//! the bulk text normalizer, the structured values it produces, the
//! caller-owned draft used while composing a product, and the product form
//! boundary that hands normalized records to storage.
//!
//! # Architecture
//!
//! ```text
//! RawInput ──► normalizer ──► FeatureList / SpecificationMap
//!                  │                    │
//!                  └──► ProductDraft    └──► NormalizedProduct ──► storage
//! ```
//!
//! Nothing here performs I/O except [`config::Config::load`].

pub mod config;
pub mod draft;
pub mod error;
pub mod normalizer;
pub mod product;
pub mod types;

pub use draft::ProductDraft;
pub use error::FormError;
pub use normalizer::{
    parse_features, parse_specifications, parse_specifications_with, SeparatorStyle, SpecOptions,
};
pub use product::{NormalizedProduct, ProductForm};
pub use types::{FeatureList, SpecificationMap};
