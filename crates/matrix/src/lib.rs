//! InsightMatrix - Feedback Analytics Backend
//!
//! Joins the store collaborator and the aggregation pipeline into the two
//! surfaces the dashboard uses: a CLI for ad-hoc analysis and a REST server
//! feeding the chart widgets.

pub mod commands;
pub mod display;
pub mod server;
pub mod service;
