//! Error types shared by the PostgREST gateway.

use reqwest::StatusCode;
use thiserror::Error;

/// Convenient result alias returning [`GatewayError`] failures.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Failures that can occur while talking to the hosted backend.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Required environment variable is missing.
    #[error("missing backend environment variable `{var}`")]
    MissingEnvVar {
        /// Name of the absent variable.
        var: &'static str,
    },
    /// Building the HTTP client failed (invalid TLS setup, etc).
    #[error("failed to build backend client")]
    ClientBuilder {
        /// Underlying client construction error.
        #[source]
        source: reqwest::Error,
    },
    /// A request could not be sent at all (DNS, connect, transport timeout).
    #[error("failed to send backend request to `{table}`: {source}")]
    RequestSend {
        /// Table the request targeted.
        table: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// The backend answered the query with an error status.
    #[error("backend rejected query on `{table}` with status {status}: {message}")]
    QueryRejected {
        /// Table the query targeted.
        table: String,
        /// HTTP status the backend answered with.
        status: StatusCode,
        /// Error text reported by the backend.
        message: String,
    },
    /// Response payload could not be parsed into the expected rows.
    #[error("failed to decode backend response for `{table}`")]
    DecodeResponse {
        /// Table the query targeted.
        table: String,
        /// Underlying decode error.
        #[source]
        source: reqwest::Error,
    },
    /// The count response carried no usable `Content-Range` header.
    #[error("backend count on `{table}` returned no row count")]
    CountUnavailable {
        /// Table the count targeted.
        table: String,
    },
}
