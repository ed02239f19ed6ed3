//! # Inspector configuration
//!
//! Every value has a default matching the deployment the tool was written
//! for, so running it with no flags and no environment inspects
//! `clever_record_keeper.students` on a local server.

use std::time::Duration;

pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "clever_record_keeper";
pub const DEFAULT_COLLECTION: &str = "students";
pub const DEFAULT_SAMPLE_LIMIT: u32 = 5;
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Database and collection names the inspection runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub database: String,
    pub collection: String,
}

/// Everything one diagnostic pass needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorConfig {
    pub uri: String,
    pub target: Target,
    /// Upper bound on printed sample documents.
    pub sample_limit: u32,
    /// Server selection timeout for the initial connection.
    pub connect_timeout: Duration,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            target: Target {
                database: DEFAULT_DATABASE.to_string(),
                collection: DEFAULT_COLLECTION.to_string(),
            },
            sample_limit: DEFAULT_SAMPLE_LIMIT,
            connect_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}
