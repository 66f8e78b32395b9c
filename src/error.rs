//! Error types for archive operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong talking to the archive.
///
/// Transport-level failures (DNS, TLS, connection reset) pass through as
/// [`Error::Transport`] without wrapping; nothing is retried or downgraded.
#[derive(Debug, Error)]
pub enum Error {
    /// An option string outside the endpoint allow-list. Raised while
    /// parsing, before any request is built.
    #[error("invalid option '{given}', expected one of {}", .expected.join(", "))]
    InvalidOption {
        given: String,
        expected: &'static [&'static str],
    },

    /// The credential file could not be read.
    #[error("cannot read credential file {}", .path.display())]
    CredentialRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The archive answered with a non-success HTTP status.
    #[error("archive request failed ({status}): {body}")]
    Request { status: u16, body: String },

    /// The request itself failed at the transport layer.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The response body was not the expected JSON array of records.
    #[error("archive response is not a JSON array of records")]
    Decode(#[source] serde_json::Error),

    /// The calibration manifest XML could not be parsed.
    #[error("malformed calibration manifest")]
    Manifest(#[from] quick_xml::Error),

    /// The output file could not be created or written.
    #[error("cannot write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn invalid_option(given: &str, expected: &'static [&'static str]) -> Self {
        Error::InvalidOption {
            given: given.to_string(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_option_lists_choices() {
        let err = Error::invalid_option("tarball", &["file", "preview", "download"]);
        let msg = err.to_string();
        assert!(msg.contains("'tarball'"));
        assert!(msg.contains("file, preview, download"));
    }

    #[test]
    fn test_request_error_carries_status_and_body() {
        let err = Error::Request {
            status: 404,
            body: "Not found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("Not found"));
    }
}
