use std::fmt;

use tonic::transport::Endpoint;
use url::Url;

use crate::error::ResolveError;

/// One unit of channel configuration produced by resolution.
///
/// Options are opaque: only the resolver constructs them, and the only thing
/// a caller can do with one is [`apply`](ChannelOption::apply) it to the
/// endpoint it is about to connect. The sequence returned by resolution is
/// ordered for determinism, though the options themselves are independent.
pub struct ChannelOption {
    kind: OptionKind,
}

enum OptionKind {
    /// Plaintext HTTP/2: no TLS, no credential negotiation.
    InsecureTransport,
}

impl ChannelOption {
    pub(crate) fn insecure_transport() -> Self {
        Self {
            kind: OptionKind::InsecureTransport,
        }
    }

    /// Apply this option to a tonic endpoint.
    ///
    /// A tonic endpoint speaks plaintext HTTP/2 until a TLS configuration is
    /// set on it, so the insecure-transport option leaves the endpoint as it
    /// is. Kinds that carry TLS or credential configuration reshape the
    /// endpoint here.
    pub fn apply(&self, endpoint: Endpoint) -> Endpoint {
        match self.kind {
            OptionKind::InsecureTransport => endpoint,
        }
    }
}

impl fmt::Debug for ChannelOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            OptionKind::InsecureTransport => write!(f, "ChannelOption(insecure transport)"),
        }
    }
}

/// Builds one channel option from the value of a recognized query parameter.
type OptionBuilder = fn(value: &str) -> Result<ChannelOption, ResolveError>;

/// Query parameters that map onto credential-bearing channel options.
///
/// A recognized key appends the option its builder produces; any other key
/// is rejected. Empty until a credential scheme lands.
const CREDENTIAL_PARAMS: &[(&str, OptionBuilder)] = &[];

fn credential_builder(key: &str) -> Option<OptionBuilder> {
    CREDENTIAL_PARAMS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, builder)| *builder)
}

/// Derive the channel options for a parsed gRPC URL.
///
/// Every resolution starts from the insecure-transport option; recognized
/// query parameters append to it (transport security and credentials are
/// orthogonal), and unrecognized ones fail the resolution outright.
///
/// `raw` is the caller's original connection string. Rejection messages echo
/// it verbatim; the re-serialized [`Url`] percent-encodes characters such as
/// `"` and would not round-trip.
pub(crate) fn dial_options(url: &Url, raw: &str) -> Result<Vec<ChannelOption>, ResolveError> {
    let mut options = vec![ChannelOption::insecure_transport()];

    for (key, value) in url.query_pairs() {
        match credential_builder(&key) {
            Some(builder) => options.push(builder(&value)?),
            None => {
                return Err(ResolveError::UnsupportedQuery {
                    url: raw.to_string(),
                });
            }
        }
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(input: &str) -> Url {
        Url::parse(input).unwrap()
    }

    #[test]
    fn test_no_query_yields_single_insecure_option() {
        let raw = "grpc://localhost:1234";
        let options = dial_options(&parsed(raw), raw).unwrap();
        assert_eq!(options.len(), 1);
        assert!(matches!(options[0].kind, OptionKind::InsecureTransport));
    }

    #[test]
    fn test_empty_query_string_carries_no_parameters() {
        let raw = "grpc://localhost:1234?";
        let options = dial_options(&parsed(raw), raw).unwrap();
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_query_parameter_rejected() {
        let raw = "grpc://localhost:1234?tls=true";
        let err = dial_options(&parsed(raw), raw).unwrap_err();
        assert!(matches!(err, ResolveError::UnsupportedQuery { .. }));
        assert_eq!(
            err.to_string(),
            format!("not sure how to parse gRPC URL: {raw}")
        );
    }

    #[test]
    fn test_key_only_parameter_rejected() {
        // `?tls` is a parameter with an empty value, not an empty query.
        let raw = "grpc://localhost:1234?tls";
        let err = dial_options(&parsed(raw), raw).unwrap_err();
        assert!(matches!(err, ResolveError::UnsupportedQuery { .. }));
    }

    #[test]
    fn test_apply_insecure_keeps_endpoint_plaintext() {
        let endpoint = Endpoint::from_static("http://localhost:1234");
        let endpoint = ChannelOption::insecure_transport().apply(endpoint);
        assert_eq!(endpoint.uri().host(), Some("localhost"));
        assert_eq!(endpoint.uri().port_u16(), Some(1234));
    }

    #[test]
    fn test_debug_names_the_kind() {
        let option = ChannelOption::insecure_transport();
        assert_eq!(format!("{option:?}"), "ChannelOption(insecure transport)");
    }
}
