//! API and credential error types.

use thiserror::Error;

/// Errors raised by the remote API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, send, or body read).
    #[error("{command} request failed")]
    Network {
        /// Logical endpoint name.
        command: &'static str,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success HTTP status.
    #[error("{command} returned HTTP {status}")]
    Status {
        /// Logical endpoint name.
        command: &'static str,
        /// HTTP status code.
        status: u16,
    },

    /// The response body could not be decoded as the expected XML.
    #[error("{command} XML decoding failed (len={body_len}): {preview}")]
    Decode {
        /// Logical endpoint name.
        command: &'static str,
        /// Length of the response body.
        body_len: usize,
        /// Start of the response body, for diagnostics.
        preview: String,
        /// Underlying deserialization error.
        #[source]
        source: quick_xml::DeError,
    },
}

/// A credential failed its format check.
///
/// Both the API key and the account id are 16-character uppercase
/// hexadecimal tokens. Only the format is checked; a well-formed token may
/// still be unknown to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// No API key was configured.
    #[error("API key is not set")]
    MissingApiKey,

    /// No account id was configured.
    #[error("account id is not set")]
    MissingAccountId,

    /// The API key is not a 16-character uppercase hex token.
    #[error("malformed API key: expected 16 uppercase hex characters")]
    MalformedApiKey,

    /// The account id is not a 16-character uppercase hex token.
    #[error("malformed account id: expected 16 uppercase hex characters")]
    MalformedAccountId,
}
