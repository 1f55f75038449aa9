//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration (file is optional)
//! - Apply command-line overrides on top
//! - Re-validate the merged result
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Precedence: command line, then file, then defaults

use std::path::Path;

use crate::config::{load_config, validate_config, ConfigError, DemoConfig};
use crate::routing::Variant;

/// Settings given on the command line that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind_address: Option<String>,
    pub variant: Option<Variant>,
}

/// Build the effective configuration.
pub fn resolve_config(path: Option<&Path>, overrides: &Overrides) -> Result<DemoConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => DemoConfig::default(),
    };

    if let Some(bind_address) = &overrides.bind_address {
        config.listener.bind_address = bind_address.clone();
    }
    if let Some(variant) = overrides.variant {
        config.app.variant = variant;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
