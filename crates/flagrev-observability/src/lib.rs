//! # flagrev-observability
//!
//! Tracing subscriber setup and the structured events emitted while
//! building snapshots, evaluating tiers and scanning candidates.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_from_config, init_tracing_with_filter};
