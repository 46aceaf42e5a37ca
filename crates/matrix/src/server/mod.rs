//! REST surface for the dashboard widgets
//!
//! Serves the distributions payload over HTTP. Uses axum for routing with a
//! shared distribution service injected as state.

pub mod handlers;
pub mod routing;
pub mod startup;
pub mod types;
