//! Matrix Core - Feedback Aggregation Pipeline
//!
//! Pure, synchronous aggregation over feedback insights: theme frequency
//! distributions, per-insight sentiment scoring, and the assembled payload
//! consumed by dashboard widgets. No I/O happens in this crate; callers hand
//! it the snapshot of records they fetched and get re-shaped data back.

pub mod aggregate;
pub mod assemble;
pub mod model;
pub mod sentiment;

pub use aggregate::ThemeDistribution;
pub use assemble::{assemble, Distributions, InsightBreakdown, ThemeFilter};
pub use model::{FeedbackEvent, Insight, Sentiment, SentimentLabel, SourceChannel};
pub use sentiment::{InsightSentimentSummary, SentimentBucket, SentimentCounts, SentimentTally};
