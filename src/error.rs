use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the plugin
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Invalid input: {0}")]
    #[diagnostic(code(closer2event::invalid_input))]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(closer2event::config))]
    Config(String),

    #[error("Template error: {0}")]
    #[diagnostic(code(closer2event::template))]
    Template(#[from] askama::Error),

    #[error("Header error: {0}")]
    #[diagnostic(code(closer2event::header))]
    Header(String),
}

/// Type alias for Result with our Error type
pub type PluginResult<T> = std::result::Result<T, Error>;

/// Helper to create invalid input errors
pub fn invalid_input(message: &str) -> Error {
    Error::InvalidInput(message.to_string())
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Config(format!("Missing environment variable: {}", var))
}
