use chrono::DateTime;
use chrono::Utc;
use enum_iterator::Sequence;
use serde::Serialize;
use strum_macros::Display;
use strum_macros::EnumString;

use crate::checkout::Checkout;
use crate::codec::private::Sealed;
use crate::codec::Encode;
use crate::product::CartLine;
use crate::product::Collection;
use crate::product::ProductVariant;
use crate::product::SearchResult;

/// Free-form metadata attached to every event. Passed through unvalidated.
///
/// Payloads nested deeper than serde_json's recursion limit of 128 levels,
/// counted from the payload root, fail to decode with a syntax error.
pub type Context = serde_json::Map<String, serde_json::Value>;

/// Event kinds, spelled as the `name` discriminator on the wire.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, EnumString, Sequence)]
#[strum(serialize_all = "snake_case")]
pub enum EventKind {
    CheckoutCompleted,
    CheckoutStarted,
    CollectionViewed,
    PageViewed,
    PaymentInfoSubmitted,
    ProductAddedToCart,
    ProductViewed,
    SearchSubmitted,
}

/// Envelope shared by all event records.
pub trait PixelEvent: Encode + serde::de::DeserializeOwned {
    const KIND: EventKind;

    fn id(&self) -> &str;
    /// Visitor identifier.
    fn client_id(&self) -> &str;
    fn name(&self) -> &str;
    fn timestamp(&self) -> &str;
    fn context(&self) -> &Context;

    /// `timestamp` parsed as RFC 3339, `None` if it does not parse.
    fn sent_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(self.timestamp())
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }
}

macro_rules! pixel_event {
    (
        $(#[$meta:meta])*
        $name:ident => $kind:ident $(, $data:ty)?
    ) => {
        record! {
            $(#[$meta])*
            pub struct $name {
                pub id: String,
                pub client_id: String,
                pub name: String,
                pub timestamp: String,
                pub context: Context,
                $(pub data: $data,)?
            }
        }

        impl PixelEvent for $name {
            const KIND: EventKind = EventKind::$kind;

            fn id(&self) -> &str {
                &self.id
            }

            fn client_id(&self) -> &str {
                &self.client_id
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn timestamp(&self) -> &str {
                &self.timestamp
            }

            fn context(&self) -> &Context {
                &self.context
            }
        }

        impl From<$name> for Event {
            fn from(event: $name) -> Self {
                Event::$kind(event)
            }
        }
    };
}

pixel_event! {
    /// A visitor completed a purchase. Emitted on the order status and
    /// checkout pages.
    CheckoutCompletedEvent => CheckoutCompleted, CheckoutCompletedData
}

record! {
    pub struct CheckoutCompletedData {
        pub checkout: Checkout,
    }
}

pixel_event! {
    /// A buyer started the checkout process.
    CheckoutStartedEvent => CheckoutStarted, CheckoutStartedData
}

record! {
    pub struct CheckoutStartedData {
        pub checkout: Checkout,
    }
}

pixel_event! {
    /// A buyer visited a product collection index page.
    CollectionViewedEvent => CollectionViewed, CollectionViewedData
}

record! {
    pub struct CollectionViewedData {
        // The pixel emits this payload under "connection".
        #[serde(rename = "connection")]
        pub collection: Collection,
    }
}

pixel_event! {
    PageViewedEvent => PageViewed
}

pixel_event! {
    PaymentInfoSubmittedEvent => PaymentInfoSubmitted, PaymentInfoSubmittedData
}

record! {
    pub struct PaymentInfoSubmittedData {
        pub checkout: Checkout,
    }
}

pixel_event! {
    ProductAddedToCartEvent => ProductAddedToCart, ProductAddedToCartData
}

record! {
    pub struct ProductAddedToCartData {
        pub cart_line: CartLine,
    }
}

pixel_event! {
    /// A buyer visited a product details page.
    ProductViewedEvent => ProductViewed, ProductViewedData
}

record! {
    pub struct ProductViewedData {
        pub product_variant: ProductVariant,
    }
}

pixel_event! {
    /// A buyer performed a search on the storefront.
    SearchSubmittedEvent => SearchSubmitted, SearchSubmittedData
}

record! {
    pub struct SearchSubmittedData {
        pub search_result: SearchResult,
    }
}

/// Any pixel event. Encodes as the wrapped record, without a tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Event {
    CheckoutCompleted(CheckoutCompletedEvent),
    CheckoutStarted(CheckoutStartedEvent),
    CollectionViewed(CollectionViewedEvent),
    PageViewed(PageViewedEvent),
    PaymentInfoSubmitted(PaymentInfoSubmittedEvent),
    ProductAddedToCart(ProductAddedToCartEvent),
    ProductViewed(ProductViewedEvent),
    SearchSubmitted(SearchSubmittedEvent),
}

impl Sealed for Event {}

impl Encode for Event {}

macro_rules! dispatch {
    ($event:expr, $e:ident => $body:expr) => {
        match $event {
            Event::CheckoutCompleted($e) => $body,
            Event::CheckoutStarted($e) => $body,
            Event::CollectionViewed($e) => $body,
            Event::PageViewed($e) => $body,
            Event::PaymentInfoSubmitted($e) => $body,
            Event::ProductAddedToCart($e) => $body,
            Event::ProductViewed($e) => $body,
            Event::SearchSubmitted($e) => $body,
        }
    };
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::CheckoutCompleted(_) => EventKind::CheckoutCompleted,
            Event::CheckoutStarted(_) => EventKind::CheckoutStarted,
            Event::CollectionViewed(_) => EventKind::CollectionViewed,
            Event::PageViewed(_) => EventKind::PageViewed,
            Event::PaymentInfoSubmitted(_) => EventKind::PaymentInfoSubmitted,
            Event::ProductAddedToCart(_) => EventKind::ProductAddedToCart,
            Event::ProductViewed(_) => EventKind::ProductViewed,
            Event::SearchSubmitted(_) => EventKind::SearchSubmitted,
        }
    }

    pub fn id(&self) -> &str {
        dispatch!(self, e => e.id())
    }

    pub fn client_id(&self) -> &str {
        dispatch!(self, e => e.client_id())
    }

    pub fn name(&self) -> &str {
        dispatch!(self, e => e.name())
    }

    pub fn timestamp(&self) -> &str {
        dispatch!(self, e => e.timestamp())
    }

    pub fn context(&self) -> &Context {
        dispatch!(self, e => e.context())
    }

    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        dispatch!(self, e => e.sent_at())
    }
}
