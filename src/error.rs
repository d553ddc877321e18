//! Error types for the CLI.
//!
//! This module defines all error types used throughout the tool. Most
//! degradations (missing docs, dropped generic shapes, path collisions)
//! lower output fidelity silently; only a missing manifest, unreadable
//! sources, and invariant violations surface here as fatal errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error during manifest or source discovery.
    #[error("Failed to scan sources: {0}")]
    Scan(#[from] ScanError),

    /// Error during Rust source parsing.
    #[error("Failed to parse source file: {0}")]
    Parse(#[from] ParseError),

    /// Error during model generation.
    #[error("Failed to generate models: {0}")]
    Generate(#[from] GenerateError),

    /// Error loading configuration.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Error writing output files.
    #[error("Failed to write output: {0}")]
    Write(#[from] WriteError),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error during manifest or source discovery.
#[derive(Debug, Error)]
pub enum ScanError {
    /// No Cargo.toml found walking up from the start directory.
    #[error("No Cargo.toml found in {start} or any parent directory")]
    ManifestNotFound { start: PathBuf },

    /// Directory does not exist.
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// No Rust files found in directory.
    #[error("No Rust files found in: {path}")]
    NoRustFiles { path: PathBuf },

    /// Invalid filter pattern.
    #[error("Invalid filter pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// IO error during scanning.
    #[error("IO error scanning {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from ignore crate walker.
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
}

/// Error during Rust source parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Syntax error in Rust source.
    #[error("Syntax error in {file}: {message}")]
    Syntax { file: PathBuf, message: String },

    /// IO error reading file.
    #[error("Failed to read {file}: {source}")]
    Io {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error during model generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A discovered artifact is neither class, interface, nor enum.
    #[error("Type '{type_name}' is neither a class, interface, nor enum and cannot be emitted")]
    UnsupportedKind { type_name: String },
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid TOML syntax.
    #[error("Invalid TOML in {path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    /// IO error reading config.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error writing output files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create directory.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    pub fn manifest_not_found(start: PathBuf) -> Self {
        Self::ManifestNotFound { start }
    }

    pub fn not_found(path: PathBuf) -> Self {
        Self::DirectoryNotFound { path }
    }

    pub fn no_rust_files(path: PathBuf) -> Self {
        Self::NoRustFiles { path }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}

impl ParseError {
    pub fn syntax(file: PathBuf, message: impl Into<String>) -> Self {
        Self::Syntax {
            file,
            message: message.into(),
        }
    }
}

impl ConfigError {
    pub fn invalid_toml(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path,
            message: message.into(),
        }
    }
}
