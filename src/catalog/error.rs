use std::path::PathBuf;
use thiserror::Error;

/// The catalog text cannot be turned into a city list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Catalog text is empty, expected a header line")]
    MissingHeader,

    #[error("Catalog header has no '{0}' column")]
    MissingColumn(&'static str),

    // One half of a coordinate convention was found without the other
    #[error("Catalog header has a '{found}' column but no '{missing}' column")]
    IncompleteCoordinates {
        found: &'static str,
        missing: &'static str,
    },

    #[error("Catalog has a header but no data rows")]
    NoDataRows,

    #[error("Catalog has no usable rows ({skipped} malformed rows skipped)")]
    NoValidRows { skipped: usize },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Failed to read catalog file '{0}'")]
    FileRead(PathBuf, #[source] std::io::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },
}
