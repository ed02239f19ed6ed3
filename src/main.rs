//! # mongo-inspector - one-shot diagnostic pass against a MongoDB collection
//!
//! Connects, pings, counts the documents of one collection and prints up to a
//! handful of them as pretty Extended JSON.
//!
//! ## Exit codes
//!
//! - `0`: success, including an empty collection
//! - `2`: the server could not be reached or did not answer `ping`
//! - `3`: counting or reading the sample failed
//!
//! ## Environment Variables
//!
//! - `MONGODB_URL`: MongoDB connection string
//! - `MONGODB_DATABASE`, `MONGODB_COLLECTION`: inspection target
//! - `RUST_LOG`: log filter for the stderr diagnostics (defaults to `warn`)

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{cli::Cli, config::InspectorConfig, db::MongoConnector, inspector::Inspector};

mod cli;
mod config;
mod db;
mod errors;
mod inspector;
mod render;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let config = InspectorConfig::from(Cli::parse());
    debug!(
        database = %config.target.database,
        collection = %config.target.collection,
        limit = config.sample_limit,
        "starting inspection"
    );

    let inspector = Inspector::new(MongoConnector, config);
    let mut stdout = std::io::stdout().lock();

    match inspector.run(&mut stdout).await {
        Ok(report) => {
            debug!(
                count = report.count,
                sampled = report.sampled,
                "inspection finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            err.exit_code()
        }
    }
}
