//! # cohort-data
//!
//! Client for the hosted relational data API and group-list loading.
//!
//! - [`DataClient`]: `fetch_all`, `insert`, and `ping` over HTTP
//! - [`RecordSource`]: the three table reads the group list needs
//! - [`load_group_list`]: concurrent fetch, abort on any failure, then assemble
//! - [`GroupListCache`]: generation-guarded snapshot of the latest list

mod client;
mod error;
mod http;
mod loader;
pub mod retry;
pub mod rows;
pub mod snapshot;
mod source;

pub use client::DataClient;
pub use error::DataError;
pub use loader::{load_group_list, load_group_list_with_retry};
pub use retry::RetryConfig;
pub use snapshot::{FetchGeneration, GroupListCache, GroupListState};
pub use source::RecordSource;
