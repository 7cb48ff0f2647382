mod client;
mod config;
mod error;
mod query;

pub use client::{AllResults, Client, HOT_KEYWORDS};
pub use config::{ApiConfig, LatencyRange};
pub use error::{ApiError, Result};
pub use query::keyword_from_query;
