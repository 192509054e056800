//! HTTP server module

pub mod api;
pub mod extract;
