//! Axum HTTP handlers.

pub mod entries;
pub mod search;
