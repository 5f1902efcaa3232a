//! HTTP handlers, one module per surface.

pub mod notes;
pub mod system;
pub mod web;
