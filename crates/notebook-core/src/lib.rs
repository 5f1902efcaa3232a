//! # notebook-core
//!
//! Core types, traits, and errors for the notebook service.
//!
//! This crate provides the note/comment model, the [`NoteRepository`] service
//! contract that every front-end goes through, and the wire types the JSON
//! surface and the dashboard share.

pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
