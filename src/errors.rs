/*!
 * Error types for the homematic-rega client.
 *
 * This module contains custom error types for the different layers of the
 * client, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur while talking to the device over the network
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request could not be sent or the connection broke down
    #[error("request to {url} failed: {source}")]
    Request {
        /// Endpoint the request was sent to
        url: String,
        /// Underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },

    /// The device did not answer within the configured timeout
    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout {
        /// Endpoint the request was sent to
        url: String,
        /// Timeout that was exceeded
        timeout_secs: u64,
    },
}

impl TransportError {
    pub(crate) fn from_reqwest(url: &str, timeout_secs: u64, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
                timeout_secs,
            }
        } else {
            Self::Request {
                url: url.to_string(),
                source,
            }
        }
    }
}

/// Errors that can occur while interpreting a script response
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// The reply carried no body at all
    #[error("empty rega response")]
    EmptyResponse,

    /// The reply contains no document boundary marker
    #[error("missing document boundary in rega response")]
    MissingBoundary,

    /// The document segment did not parse as a well-formed document.
    /// The console output preceding it was still recovered.
    #[error("malformed result document: {source}")]
    MalformedDocument {
        /// Console output recovered from before the boundary
        output: String,
        /// Underlying parse error
        #[source]
        source: roxmltree::Error,
    },
}

/// Error when decoding a canned script's JSON console output fails
#[derive(Error, Debug)]
#[error("malformed script result: {source}")]
pub struct DecodeError {
    /// The raw console output that failed to decode
    pub output: String,
    /// Underlying JSON error
    #[source]
    pub source: serde_json::Error,
}

/// Errors that can occur while fetching the translation asset.
///
/// These never surface to callers: the translation cache degrades to an
/// empty table instead, since localized names are an enhancement rather
/// than a correctness requirement.
#[derive(Error, Debug)]
pub enum TranslationFetchError {
    /// Error when making the asset request fails
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The asset was served with an empty body
    #[error("empty translation asset")]
    EmptyAsset,
}

/// Main client error type that wraps all other errors
#[derive(Error, Debug)]
pub enum RegaError {
    /// Error from the network layer
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Error from response interpretation
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Error from canned-script result decoding
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Invalid session configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl RegaError {
    /// Console output recovered alongside a failure, if any.
    ///
    /// A response whose document segment or JSON payload is broken still
    /// carries usable console text; this returns it.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Protocol(ProtocolError::MalformedDocument { output, .. }) => Some(output),
            Self::Decode(DecodeError { output, .. }) => Some(output),
            _ => None,
        }
    }
}
