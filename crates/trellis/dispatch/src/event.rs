//! The dispatch-event value object.

use serde::{Deserialize, Serialize};
use url::Url;

/// Ingestion endpoint events are posted to when no explicit destination
/// is given.
pub const DEFAULT_EVENT_ENDPOINT: &str = "https://logx.optimizely.com/v1/events";

/// One outbound analytics event, ready for transport.
///
/// Immutable once constructed: both fields are private and only exposed
/// through read accessors. The payload is an opaque, already-serialized
/// body; this type never inspects it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchEvent {
    destination: Url,
    payload: Vec<u8>,
}

impl DispatchEvent {
    /// Build an event destined for the default ingestion endpoint.
    ///
    /// Never fails at runtime: the endpoint constant is validated by
    /// `default_endpoint` (a malformed constant is a bug in this crate,
    /// not a condition callers handle).
    pub fn new(payload: Vec<u8>) -> Self {
        Self {
            destination: default_endpoint(),
            payload,
        }
    }

    /// Build an event for an explicit destination.
    ///
    /// No reachability validation happens here; that is the transport
    /// layer's problem.
    pub fn with_destination(destination: Url, payload: Vec<u8>) -> Self {
        Self {
            destination,
            payload,
        }
    }

    /// Where this event should be posted
    pub fn destination(&self) -> &Url {
        &self.destination
    }

    /// The opaque serialized body
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Consume the event, yielding its body for transport
    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}

/// Parse the built-in endpoint constant.
///
/// The constant is part of this crate's source; failing to parse it is a
/// programming error, so the invariant is enforced with `expect` rather
/// than a `Result` no caller could act on.
fn default_endpoint() -> Url {
    DEFAULT_EVENT_ENDPOINT
        .parse()
        .expect("built-in event endpoint constant must be a valid URL")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_endpoint_constant_is_valid() {
        let url = default_endpoint();
        assert_eq!(url.as_str(), DEFAULT_EVENT_ENDPOINT);
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_new_uses_default_endpoint() {
        let event = DispatchEvent::new(b"{\"visitors\":[]}".to_vec());
        assert_eq!(event.destination().as_str(), DEFAULT_EVENT_ENDPOINT);
        assert_eq!(event.payload(), b"{\"visitors\":[]}");
    }

    #[test]
    fn test_explicit_destination_is_kept() {
        let url: Url = "https://ingest.example.com/v2/batch".parse().unwrap();
        let event = DispatchEvent::with_destination(url.clone(), vec![1, 2, 3]);
        assert_eq!(event.destination(), &url);
        assert_eq!(event.into_payload(), vec![1, 2, 3]);
    }

    proptest! {
        #[test]
        fn prop_new_echoes_payload(payload in proptest::collection::vec(any::<u8>(), 0..512)) {
            let event = DispatchEvent::new(payload.clone());
            prop_assert_eq!(event.destination().as_str(), DEFAULT_EVENT_ENDPOINT);
            prop_assert_eq!(event.payload(), payload.as_slice());
        }

        #[test]
        fn prop_with_destination_echoes_both(
            host in "[a-z]{1,12}",
            payload in proptest::collection::vec(any::<u8>(), 0..512),
        ) {
            let url: Url = format!("https://{host}.example.com/v1/events").parse().unwrap();
            let event = DispatchEvent::with_destination(url.clone(), payload.clone());
            prop_assert_eq!(event.destination(), &url);
            prop_assert_eq!(event.payload(), payload.as_slice());
        }
    }
}
