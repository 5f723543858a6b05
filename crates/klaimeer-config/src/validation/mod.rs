//! Full configuration validation.
//!
//! Validates numeric ranges and color formats. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod globe;
mod helpers;
mod misc;

#[cfg(test)]
mod tests;

use crate::schema::KlaimeerConfig;
use klaimeer_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &KlaimeerConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    misc::validate_window(&mut errors, config);
    globe::validate_camera(&mut errors, config);
    globe::validate_layers(&mut errors, config);
    globe::validate_animation(&mut errors, config);
    misc::validate_counters(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
