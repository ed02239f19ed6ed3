use std::time::Duration;

use clap::Parser;

use crate::config::{
    DEFAULT_COLLECTION, DEFAULT_DATABASE, DEFAULT_SAMPLE_LIMIT, DEFAULT_TIMEOUT_MS, DEFAULT_URI,
    InspectorConfig, Target,
};

/// Check connectivity to a MongoDB collection and print a few sample documents.
#[derive(Parser, Debug)]
#[command(name = "mongo-inspector", version, about)]
pub struct Cli {
    /// MongoDB connection string
    #[arg(long, env = "MONGODB_URL", default_value = DEFAULT_URI)]
    pub uri: String,

    /// Database holding the collection
    #[arg(long, env = "MONGODB_DATABASE", default_value = DEFAULT_DATABASE)]
    pub database: String,

    /// Collection to inspect
    #[arg(long, env = "MONGODB_COLLECTION", default_value = DEFAULT_COLLECTION)]
    pub collection: String,

    /// How many sample documents to print
    #[arg(
        long,
        default_value_t = DEFAULT_SAMPLE_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub limit: u32,

    /// Server selection timeout in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,
}

impl From<Cli> for InspectorConfig {
    fn from(cli: Cli) -> Self {
        InspectorConfig {
            uri: cli.uri,
            target: Target {
                database: cli.database,
                collection: cli.collection,
            },
            sample_limit: cli.limit,
            connect_timeout: Duration::from_millis(cli.timeout_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn overrides_reach_config() {
        let cli = Cli::try_parse_from([
            "mongo-inspector",
            "--uri",
            "mongodb://db.internal:27018",
            "--database",
            "school",
            "--collection",
            "pupils",
            "--limit",
            "2",
            "--timeout-ms",
            "250",
        ])
        .unwrap();

        let config = InspectorConfig::from(cli);
        assert_eq!(config.uri, "mongodb://db.internal:27018");
        assert_eq!(config.target.database, "school");
        assert_eq!(config.target.collection, "pupils");
        assert_eq!(config.sample_limit, 2);
        assert_eq!(config.connect_timeout, Duration::from_millis(250));
    }

    #[test]
    fn zero_limit_is_rejected() {
        assert!(Cli::try_parse_from(["mongo-inspector", "--limit", "0"]).is_err());
    }

    #[test]
    fn defaults_match_builtin_config() {
        // Only meaningful when none of the MONGODB_* variables are set.
        if ["MONGODB_URL", "MONGODB_DATABASE", "MONGODB_COLLECTION"]
            .iter()
            .any(|var| std::env::var_os(var).is_some())
        {
            return;
        }

        let cli = Cli::try_parse_from(["mongo-inspector"]).unwrap();
        assert_eq!(InspectorConfig::from(cli), InspectorConfig::default());
    }
}
