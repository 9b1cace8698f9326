//! Error handling for dddgen.
//! Defines the error type and result alias used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating a project skeleton.
///
/// Every variant is terminal: the binary reports it and exits with status 1.
#[derive(Error, Debug)]
pub enum Error {
    /// The config file could not be read, parsed or validated
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The language token is not one of the supported targets
    #[error("Unsupported language '{language}'. Available options: {available}.")]
    UnsupportedLanguage { language: String, available: String },

    /// A directory of the project tree could not be created
    #[error("Failed to create directory '{}': {source}.", .path.display())]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A generated file could not be written
    #[error("Failed to write file '{}': {source}.", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Traversal of the generated tree failed
    #[error("Failed to walk project tree: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// Entry-point template rendering failed
    #[error("Template error: {0}.")]
    TemplateError(#[from] minijinja::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
