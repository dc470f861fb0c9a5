//! Error handling for mcp-forge.
//! Defines the error type and result alias used throughout the crate.

use thiserror::Error;

/// Custom error types for project generation.
///
/// Every failure of a generation request ends up as one of these variants and is
/// reported to the caller as a single terminal error.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// The project name is empty or does not produce a usable package identifier.
    #[error("Invalid input: {0}.")]
    InvalidInput(String),

    /// The target project root is already present on disk.
    #[error("Cannot proceed: directory '{path}' already exists.")]
    DestinationExists { path: String },

    /// A manifest entry names a template that is not bundled with the tool.
    #[error("Template '{template}' is not bundled with mcp-forge.")]
    TemplateNotFound { template: String },

    /// A template references a value the render context does not provide.
    #[error("Template '{template}' references a missing context field. Original error: {detail}")]
    ContextFieldMissing { template: String, detail: String },

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors in the project settings file
    #[error("Configuration error: {0}.")]
    ConfigError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Error: {err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
