//! # Database access
//!
//! The inspector only ever needs four things from a server: open a client,
//! ping it, count a collection, and read a limited cursor. Those are captured
//! by [`Connector`], [`DocumentSource`] and [`DocumentCursor`] so the pass can
//! run against MongoDB in production and against an in-memory store in tests.
//!
//! [`MongoConnector`] is the real implementation on top of the `mongodb`
//! driver.

use std::time::Duration;

use futures_util::TryStreamExt;
use mongodb::{
    Client, Collection, Cursor,
    bson::{Document, doc},
    options::ClientOptions,
};
use tracing::debug;

use crate::config::Target;
use crate::errors::StoreError;

/// Opens a connection to a document store.
pub trait Connector {
    type Source: DocumentSource;

    /// Builds a client for `uri`. Implementations may connect lazily; the
    /// caller confirms liveness with [`DocumentSource::ping`].
    async fn connect(&self, uri: &str, timeout: Duration) -> Result<Self::Source, StoreError>;
}

/// An open connection. Consumed by [`close`](DocumentSource::close), so it
/// cannot be released twice.
pub trait DocumentSource: Sized {
    type Cursor: DocumentCursor;

    async fn ping(&self) -> Result<(), StoreError>;

    async fn count(&self, target: &Target) -> Result<u64, StoreError>;

    /// Runs an unfiltered, unsorted find returning at most `limit` documents.
    async fn find(&self, target: &Target, limit: u32) -> Result<Self::Cursor, StoreError>;

    async fn close(self);
}

/// Forward-only stream of documents. `Ok(None)` means exhausted.
pub trait DocumentCursor {
    async fn next_document(&mut self) -> Result<Option<Document>, StoreError>;
}

/// Connects through the official MongoDB driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct MongoConnector;

impl Connector for MongoConnector {
    type Source = MongoSource;

    async fn connect(&self, uri: &str, timeout: Duration) -> Result<MongoSource, StoreError> {
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.server_selection_timeout = Some(timeout);
        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(client_options)?;
        debug!(?timeout, "built MongoDB client");

        Ok(MongoSource { client })
    }
}

/// A MongoDB client wrapped as a [`DocumentSource`].
#[derive(Debug)]
pub struct MongoSource {
    client: Client,
}

impl MongoSource {
    fn collection(&self, target: &Target) -> Collection<Document> {
        self.client
            .database(&target.database)
            .collection::<Document>(&target.collection)
    }
}

impl DocumentSource for MongoSource {
    type Cursor = MongoCursor;

    async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    async fn count(&self, target: &Target) -> Result<u64, StoreError> {
        let count = self.collection(target).count_documents(doc! {}).await?;
        Ok(count)
    }

    async fn find(&self, target: &Target, limit: u32) -> Result<MongoCursor, StoreError> {
        let cursor = self
            .collection(target)
            .find(doc! {})
            .limit(i64::from(limit))
            .await?;
        Ok(MongoCursor { inner: cursor })
    }

    async fn close(self) {
        self.client.shutdown().await;
        debug!("MongoDB client shut down");
    }
}

/// Driver cursor adapted to [`DocumentCursor`].
pub struct MongoCursor {
    inner: Cursor<Document>,
}

impl DocumentCursor for MongoCursor {
    async fn next_document(&mut self) -> Result<Option<Document>, StoreError> {
        Ok(self.inner.try_next().await?)
    }
}
