//! Matrix Store - Insight Store Collaborator
//!
//! The aggregation pipeline never talks to the network itself; this crate is
//! the boundary between it and the Insight Store. It owns the store
//! configuration, the duck-typed raw rows the store actually returns, the
//! validation step that turns them into `matrix_core` records, and the two
//! client implementations (REST table API and local JSON snapshot).

pub mod config;
pub mod records;
pub mod rest;
pub mod snapshot;
pub mod store;

pub use config::StoreConfig;
pub use records::{RawFeedbackEvent, RawInsight};
pub use rest::RestInsightStore;
pub use snapshot::SnapshotStore;
pub use store::{InsightStore, StoreError};

#[cfg(any(test, feature = "mocks"))]
pub use store::MockInsightStore;
