//! Errors raised while loading or checking configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or env var could not be merged into the config shape.
    #[error("cannot read cohort configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A section the command needs has empty required fields.
    #[error("[{section}] is not configured; set it in .cohort/config.toml or COHORT_{}__* env vars", .section.to_uppercase())]
    NotConfigured { section: String },

    /// A value is present but unusable.
    #[error("{field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
