use reqwest::StatusCode;
use serde::Serializer;
use thiserror::Error;

/// Errors produced while resolving, fetching or reporting an investigation.
///
/// Everything except argument validation in the binary ends up embedded in
/// the result envelope rather than aborting the run.
#[derive(Debug, Error)]
pub enum Error {
    /// DNS failure, timeout, connection reset or a malformed body. The only
    /// case where no status code exists.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-200 status.
    #[error("API error: {0}")]
    HttpStatus(StatusCode),

    /// 404 on a thread fetch. Distinguished from other statuses because the
    /// thread may simply have rolled off into the archive.
    #[error("thread not found (404) - may have been deleted or archived")]
    ThreadGone,

    /// The site is recognized but has no fetch implementation.
    #[error("site {0} not yet implemented")]
    UnsupportedSite(String),

    /// A parameter required by the chosen operation was absent.
    #[error("{0} required for {1} operation")]
    MissingParameter(&'static str, &'static str),

    /// The operation name did not match any known operation.
    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    /// Failure writing the results file.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Failure serializing the results file.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Serializes an error as its display string, for embedding in the envelope.
pub(crate) fn serialize_display<S>(err: &Error, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(err)
}
