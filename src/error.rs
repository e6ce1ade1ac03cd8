use thiserror::Error;

/// Errors that can occur while resolving a gRPC connection string.
///
/// Resolution either fully succeeds or fails with one of these variants;
/// there is no partial or recoverable state. Every message embeds the
/// caller's original connection string so the operator can see exactly what
/// was rejected.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The connection string is not a well-formed URL.
    #[error("failed to parse gRPC URL: {url}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The URL parsed, but its scheme is not `grpc`.
    #[error("gRPC URL must start with {expected}://, not {found}://.  ({url})")]
    InvalidScheme {
        expected: &'static str,
        found: String,
        url: String,
    },

    /// The URL carries query parameters the option builder does not
    /// recognize.
    #[error("not sure how to parse gRPC URL: {url}")]
    UnsupportedQuery { url: String },
}
