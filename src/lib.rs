//! # grpc_url
//!
//! Resolve a `grpc://` connection string into the dial address and channel
//! options a tonic client needs to open a channel.
//!
//! Connection strings follow URL syntax:
//!
//! ```text
//! grpc://[userinfo@]host[:port][/path][?query]
//! ```
//!
//! The scheme must be `grpc`. The `host[:port]` authority becomes the dial
//! address, kept verbatim (no default port is injected). A URL without query
//! parameters selects the one supported channel configuration, insecure
//! transport. Query parameters the resolver does not recognize are rejected
//! rather than silently ignored, so every returned option set is fully
//! explained by its input.
//!
//! Resolution is a pure, synchronous translation: no connection is opened,
//! no credential is verified, and nothing is cached.
//!
//! # Example
//!
//! ```
//! let (address, options) = grpc_url::resolve("grpc://localhost:8258")?;
//!
//! assert_eq!(address, "localhost:8258");
//! assert_eq!(options.len(), 1);
//! # Ok::<(), grpc_url::ResolveError>(())
//! ```
//!
//! Handing the result to tonic:
//!
//! ```ignore
//! use tonic::transport::Endpoint;
//!
//! let (address, options) = grpc_url::resolve(&grpc_url)?;
//!
//! let mut endpoint = Endpoint::from_shared(format!("http://{address}"))?;
//! for option in &options {
//!     endpoint = option.apply(endpoint);
//! }
//! let channel = endpoint.connect().await?;
//! ```

mod error;
mod options;
mod resolver;

pub use error::ResolveError;
pub use options::ChannelOption;
pub use resolver::{GrpcUrlResolver, UrlResolver, resolve};

/// URL scheme a connection string must carry to resolve.
pub const GRPC_SCHEME: &str = "grpc";
