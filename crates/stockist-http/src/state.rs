use std::sync::Arc;

use stockist_core::{config::Config, SpecOptions};

/// Shared, read-only handler state.
pub struct AppState {
    pub config: Config,
    /// Options for the form path, derived from `config.normalizer`.
    pub spec_options: SpecOptions,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        let spec_options = SpecOptions::from(&config.normalizer);
        Arc::new(Self {
            config,
            spec_options,
        })
    }
}
