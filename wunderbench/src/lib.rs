//! Load-test benchmark for a wunderbase GraphQL endpoint.
//!
//! One scenario: POST a fixed `AllPosts` query to a local wunderbase instance
//! and record two named checks against each response. Scheduling, concurrency,
//! pacing and latency/error aggregation are balter's job.

pub mod checks;
pub mod scenario;

pub use scenario::{all_posts, QUERY_PAYLOAD, TARGET_URL};
