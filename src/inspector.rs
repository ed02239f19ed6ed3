//! # Inspector
//!
//! One diagnostic pass: connect, ping, count the target collection, print a
//! bounded sample, close. The connection is closed exactly once on every
//! path that opened it.

use std::io::Write;

use mongodb::bson::Document;
use tracing::{debug, info};

use crate::config::InspectorConfig;
use crate::db::{Connector, DocumentCursor, DocumentSource};
use crate::errors::{InspectError, StoreError};
use crate::render::render_document;

/// What a successful pass observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub count: u64,
    pub sampled: usize,
}

/// Forward-only cursor that yields at most `limit` documents, numbered from 1.
///
/// Once it returns `Ok(None)` it never touches the underlying cursor again.
pub struct SampleCursor<K> {
    inner: K,
    remaining: u32,
    position: usize,
    done: bool,
}

impl<K: DocumentCursor> SampleCursor<K> {
    pub fn new(inner: K, limit: u32) -> Self {
        Self {
            inner,
            remaining: limit,
            position: 0,
            done: limit == 0,
        }
    }

    pub async fn next_sample(&mut self) -> Result<Option<(usize, Document)>, StoreError> {
        if self.done {
            return Ok(None);
        }

        match self.inner.next_document().await? {
            Some(document) => {
                self.remaining -= 1;
                self.position += 1;
                self.done = self.remaining == 0;
                Ok(Some((self.position, document)))
            }
            None => {
                self.done = true;
                Ok(None)
            }
        }
    }
}

pub struct Inspector<C> {
    connector: C,
    config: InspectorConfig,
}

impl<C: Connector> Inspector<C> {
    pub fn new(connector: C, config: InspectorConfig) -> Self {
        Self { connector, config }
    }

    /// Runs the full pass, writing the report to `out`.
    pub async fn run<W: Write>(&self, out: &mut W) -> Result<Report, InspectError> {
        let source = self.connect().await?;
        let result = self.inspect(&source, out).await;
        source.close().await;
        debug!("connection released");
        result
    }

    async fn connect(&self) -> Result<C::Source, InspectError> {
        let uri = &self.config.uri;

        let source = self
            .connector
            .connect(uri, self.config.connect_timeout)
            .await
            .map_err(|e| InspectError::connectivity(uri, e))?;

        if let Err(e) = source.ping().await {
            source.close().await;
            return Err(InspectError::connectivity(uri, e));
        }

        info!("ping succeeded");
        Ok(source)
    }

    async fn inspect<W: Write>(
        &self,
        source: &C::Source,
        out: &mut W,
    ) -> Result<Report, InspectError> {
        let uri = &self.config.uri;
        let target = &self.config.target;
        let limit = self.config.sample_limit;

        let count = source.count(target).await.map_err(InspectError::query)?;
        info!(
            database = %target.database,
            collection = %target.collection,
            count,
            "counted documents"
        );

        writeln!(
            out,
            "Connected to {uri} -> DB: {} -> Collection: {}",
            target.database, target.collection
        )
        .map_err(InspectError::query)?;
        writeln!(out, "Document count: {count}").map_err(InspectError::query)?;

        if count == 0 {
            writeln!(out, "Collection is empty.").map_err(InspectError::query)?;
            return Ok(Report { count, sampled: 0 });
        }

        write!(out, "\nShowing up to {limit} sample documents:\n\n").map_err(InspectError::query)?;

        let cursor = source.find(target, limit).await.map_err(InspectError::query)?;
        let mut samples = SampleCursor::new(cursor, limit);
        let mut sampled = 0;

        while let Some((index, document)) = samples.next_sample().await.map_err(InspectError::query)? {
            let rendered = render_document(&document).map_err(InspectError::query)?;
            write!(out, "--- Document {index} ---\n{rendered}\n\n").map_err(InspectError::query)?;
            out.flush().map_err(InspectError::query)?;
            sampled = index;
        }

        debug!(sampled, "sampling finished");
        Ok(Report { count, sampled })
    }
}
