//! `assistlist` - Parent/guardian and student records for educational assistance
//!
//! This library provides the text store format, the record repository with its
//! single-generation backup, the interactive editor loop, and the printable
//! document renderer.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod document;
pub mod editor;
pub mod entry;
pub mod error;
pub mod fields;
pub mod logging;
pub mod store;

pub use config::Config;
pub use document::{render, RenderOutcome};
pub use editor::Editor;
pub use entry::{Entry, FieldMap};
pub use error::{Error, Result};
pub use fields::FieldLists;
pub use logging::init_logging;
pub use store::Store;
