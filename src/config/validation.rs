//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (intervals > 0, threshold >= 1, ports valid)
//! - Check the registry address parses as a URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AgentConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::AgentConfig;
use thiserror::Error;
use url::Url;

/// A single semantic violation in the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("service.id must not be empty")]
    EmptyServiceId,

    #[error("service.name must not be empty")]
    EmptyServiceName,

    #[error("service.bind_port must not be 0")]
    ZeroBindPort,

    #[error("registry.address is not a valid URL: {0}")]
    InvalidRegistryAddress(String),

    #[error("monitor.watched_service must not be empty")]
    EmptyWatchedService,

    #[error("monitor.poll_interval_secs must be greater than 0")]
    ZeroPollInterval,

    #[error("monitor.failure_threshold must be at least 1")]
    ZeroFailureThreshold,

    #[error("monitor.probe_timeout_secs must be greater than 0")]
    ZeroProbeTimeout,
}

/// Validate a parsed configuration, collecting every violation.
pub fn validate_config(config: &AgentConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.service.id.is_empty() {
        errors.push(ValidationError::EmptyServiceId);
    }
    if config.service.name.is_empty() {
        errors.push(ValidationError::EmptyServiceName);
    }
    if config.service.bind_port == 0 {
        errors.push(ValidationError::ZeroBindPort);
    }
    if Url::parse(&config.registry.address).is_err() {
        errors.push(ValidationError::InvalidRegistryAddress(
            config.registry.address.clone(),
        ));
    }
    if config.monitor.watched_service.is_empty() {
        errors.push(ValidationError::EmptyWatchedService);
    }
    if config.monitor.poll_interval_secs == 0 {
        errors.push(ValidationError::ZeroPollInterval);
    }
    if config.monitor.failure_threshold == 0 {
        errors.push(ValidationError::ZeroFailureThreshold);
    }
    if config.monitor.probe_timeout_secs == 0 {
        errors.push(ValidationError::ZeroProbeTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
