//! JSON decoding and encoding of pixel events.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use tracing::trace;

use crate::error::DecodeError;
use crate::error::Result;
use crate::event::CheckoutCompletedEvent;
use crate::event::CheckoutStartedEvent;
use crate::event::CollectionViewedEvent;
use crate::event::Event;
use crate::event::EventKind;
use crate::event::PageViewedEvent;
use crate::event::PaymentInfoSubmittedEvent;
use crate::event::PixelEvent;
use crate::event::ProductAddedToCartEvent;
use crate::event::ProductViewedEvent;
use crate::event::SearchSubmittedEvent;

pub(crate) mod private {
    pub trait Sealed {}
}

/// Schema records. Every field maps to a JSON value, so encoding cannot fail.
pub trait Encode: Serialize + private::Sealed {}

macro_rules! by_kind {
    ($kind:expr, $decode:ident, $input:expr) => {
        match $kind {
            EventKind::CheckoutCompleted => $decode::<CheckoutCompletedEvent>($input).map(Event::from),
            EventKind::CheckoutStarted => $decode::<CheckoutStartedEvent>($input).map(Event::from),
            EventKind::CollectionViewed => $decode::<CollectionViewedEvent>($input).map(Event::from),
            EventKind::PageViewed => $decode::<PageViewedEvent>($input).map(Event::from),
            EventKind::PaymentInfoSubmitted => {
                $decode::<PaymentInfoSubmittedEvent>($input).map(Event::from)
            }
            EventKind::ProductAddedToCart => {
                $decode::<ProductAddedToCartEvent>($input).map(Event::from)
            }
            EventKind::ProductViewed => $decode::<ProductViewedEvent>($input).map(Event::from),
            EventKind::SearchSubmitted => $decode::<SearchSubmittedEvent>($input).map(Event::from),
        }
    };
}

fn rejected(kind: EventKind, err: DecodeError) -> DecodeError {
    // reasons may quote payload values, keep them out of the logs
    debug!(kind = %kind, path = err.path().unwrap_or("-"), "pixel event rejected");
    err
}

/// Decodes a payload as event `E`.
///
/// Missing or `null` keys take their zero value and unknown keys are ignored.
pub fn decode<E: PixelEvent>(data: &[u8]) -> Result<E> {
    let value = parse(data).map_err(|err| rejected(E::KIND, err))?;

    from_value(value)
}

/// Decodes a payload as the given kind. The payload's `name` is not checked.
pub fn decode_kind(data: &[u8], kind: EventKind) -> Result<Event> {
    by_kind!(kind, decode, data)
}

/// Decodes a payload, picking the kind from its `name` discriminator.
pub fn decode_event(data: &[u8]) -> Result<Event> {
    let value = parse(data)?;
    let kind = kind_of(&value)?;

    by_kind!(kind, from_value, value)
}

fn parse(data: &[u8]) -> Result<Value> {
    let value: Value = serde_json::from_slice(data)?;
    if !value.is_object() {
        return Err(DecodeError::Field {
            path: ".".to_string(),
            reason: "expected a JSON object".to_string(),
        });
    }

    Ok(value)
}

fn kind_of(value: &Value) -> Result<EventKind> {
    let name = match value.get("name") {
        None | Some(Value::Null) => "",
        Some(Value::String(name)) => name.as_str(),
        Some(_) => {
            return Err(DecodeError::Field {
                path: "name".to_string(),
                reason: "expected a string".to_string(),
            });
        }
    };

    name.parse().map_err(|_| {
        debug!(event_name = name, "unknown pixel event");
        DecodeError::UnknownEvent(name.to_string())
    })
}

fn from_value<E: PixelEvent>(value: Value) -> Result<E> {
    let event: E = serde_path_to_error::deserialize(value).map_err(|err| rejected(E::KIND, err.into()))?;

    trace!(kind = %E::KIND, id = event.id(), "pixel event decoded");
    Ok(event)
}

pub fn encode<T: Encode>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("schema records serialize infallibly")
}

pub fn encode_to_string<T: Encode>(value: &T) -> String {
    serde_json::to_string(value).expect("schema records serialize infallibly")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PAGE_VIEWED: &str =
        r#"{"id":"1","clientId":"c","name":"page_viewed","timestamp":"t","context":{}}"#;

    #[test]
    fn test_decode_by_name() {
        let event = decode_event(PAGE_VIEWED.as_bytes()).unwrap();
        assert_eq!(event.kind(), EventKind::PageViewed);
        assert_eq!(event.id(), "1");
    }

    #[test]
    fn test_decode_kind_ignores_name() {
        let event = decode_kind(PAGE_VIEWED.as_bytes(), EventKind::SearchSubmitted).unwrap();
        match event {
            Event::SearchSubmitted(e) => {
                assert_eq!(e.name, "page_viewed");
                assert_eq!(e.data, Default::default());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_unknown_name() {
        let err = decode_event(br#"{"name":"cart_viewed"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownEvent(ref name) if name == "cart_viewed"));

        let err = decode_event(br#"{"id":"1"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownEvent(ref name) if name.is_empty()));
    }

    #[test]
    fn test_bad_envelope() {
        let err = decode_event(b"[1,2]").unwrap_err();
        assert_eq!(err.path(), Some("."));

        let err = decode_event(br#"{"name":7}"#).unwrap_err();
        assert_eq!(err.path(), Some("name"));

        let err = decode::<PageViewedEvent>(b"[]").unwrap_err();
        assert_eq!(err.path(), Some("."));
    }

    #[test]
    fn test_trailing_characters() {
        let data = format!("{PAGE_VIEWED} {{}}");
        let err = decode::<PageViewedEvent>(data.as_bytes()).unwrap_err();
        assert!(matches!(err, DecodeError::Syntax { .. }));

        let data = format!("{PAGE_VIEWED}\n");
        assert!(decode::<PageViewedEvent>(data.as_bytes()).is_ok());
    }

    #[test]
    fn test_decode_event_path() {
        let err = decode_event(
            br#"{"name":"checkout_started","data":{"checkout":{"lineItems":[{},{"quantity":"2"}]}}}"#,
        )
        .unwrap_err();
        assert_eq!(err.path(), Some("data.checkout.lineItems[1].quantity"));
    }
}
