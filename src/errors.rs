use std::process::ExitCode;
use thiserror::Error;

/// Boxed error raised by a document store or by the report writer.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Failure of an inspection pass, split by the phase that failed.
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("Unable to connect to MongoDB at {uri}: {source}")]
    Connectivity {
        uri: String,
        #[source]
        source: StoreError,
    },
    #[error("Failed while querying the collection: {0}")]
    Query(#[source] StoreError),
}

impl InspectError {
    pub fn connectivity(uri: &str, source: impl Into<StoreError>) -> Self {
        InspectError::Connectivity {
            uri: uri.to_string(),
            source: source.into(),
        }
    }

    pub fn query(source: impl Into<StoreError>) -> Self {
        InspectError::Query(source.into())
    }

    pub fn code(&self) -> u8 {
        match self {
            InspectError::Connectivity { .. } => 2,
            InspectError::Query(_) => 3,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }
}
