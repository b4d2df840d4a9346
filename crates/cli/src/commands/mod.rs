//! Subcommand implementations.
//!
//! Each command writes its result to the given writer so tests can capture
//! it; progress goes through `tracing`.

pub mod check;
pub mod export;
pub mod sitemap;
