//! stockist — product text normalization for a wholesale storefront.
//!
//! The work is split across the workspace crates; this package only wires
//! them into the `stockist` binary.
//!
//! # Architecture
//!
//! ```text
//! stockist (CLI) ──► stockist-http ──► stockist-core
//!        │                                  ▲
//!        └──────────────────────────────────┘
//! ```
//!
//! `stockist-core` holds the normalizer, draft and product form types;
//! `stockist-http` exposes them over JSON.

pub mod cli;
