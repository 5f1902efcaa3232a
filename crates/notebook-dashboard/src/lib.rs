//! # notebook-dashboard
//!
//! Terminal dashboard over the notebook JSON API: a [`NotebookClient`] for the
//! HTTP calls and text widgets in [`render`].

pub mod client;
pub mod render;

pub use client::{ClientError, NotebookClient};
