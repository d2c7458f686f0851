//! Error types for assistlist.
//!
//! This module defines all error types used throughout the assistlist crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for assistlist operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Store Errors ===
    /// Failed to read the store file.
    #[error("failed to read store file {path}: {source}")]
    StoreRead {
        /// Path to the store file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the store file.
    #[error("failed to write store file {path}: {source}")]
    StoreWrite {
        /// Path to the store file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the backup copy of the store file.
    #[error("failed to write backup file {path}: {source}")]
    BackupWrite {
        /// Path to the backup file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Document Errors ===
    /// Failed to produce the printable document.
    #[error("failed to write document {path}: {message}")]
    DocumentWrite {
        /// Path to the document file.
        path: PathBuf,
        /// Description of what went wrong.
        message: String,
    },

    /// The document package could not be serialized.
    #[error("docx error: {message}")]
    Docx {
        /// Description reported by the docx writer.
        message: String,
    },

    /// A field value holds a character that XML documents cannot carry.
    #[error("cannot print {character:?} in document text {text:?}")]
    UnprintableText {
        /// The cell line holding the character.
        text: String,
        /// The offending character.
        character: char,
    },

    // === Editor Errors ===
    /// The operator entered an entry number that does not exist.
    #[error("invalid entry number '{input}' (expected 1..={len})")]
    InvalidIndex {
        /// The raw text the operator typed.
        input: String,
        /// Number of entries at the time of the prompt.
        len: usize,
    },

    /// Console input ended while a prompt was waiting for a line.
    #[error("input closed while waiting for a response")]
    InputClosed,

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// File system or console operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for assistlist operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid entry number error.
    #[must_use]
    pub fn invalid_index(input: impl Into<String>, len: usize) -> Self {
        Self::InvalidIndex {
            input: input.into(),
            len,
        }
    }

    /// Create a document write error.
    #[must_use]
    pub fn document_write(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DocumentWrite {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check if this error was caused by a bad entry number.
    #[must_use]
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, Self::InvalidIndex { .. })
    }

    /// Check if this error was caused by console input ending.
    #[must_use]
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}
