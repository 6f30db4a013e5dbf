//! Typed records for storefront analytics pixel events.
//!
//! Each event kind decodes from, and encodes to, the JSON object the pixel
//! emits. Missing keys and `null`s decode to zero values, unknown keys are
//! ignored, and type mismatches fail with the path of the offending field.

/// Declares a wire record: camelCase keys, zero value for missing or `null`
/// keys, and an infallible encoding.
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident: $ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        #[serde_with::serde_as]
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde_as(as = "serde_with::DefaultOnNull")]
                pub $field: $ty,
            )*
        }

        impl $crate::codec::private::Sealed for $name {}

        impl $crate::codec::Encode for $name {}
    };
}

pub mod checkout;
pub mod codec;
pub mod error;
pub mod event;
pub mod money;
pub mod product;

pub use checkout::Attribute;
pub use checkout::Checkout;
pub use checkout::CheckoutLineItem;
pub use checkout::MailingAddress;
pub use checkout::Order;
pub use checkout::ShippingRate;
pub use codec::decode;
pub use codec::decode_event;
pub use codec::decode_kind;
pub use codec::encode;
pub use codec::encode_to_string;
pub use codec::Encode;
pub use error::DecodeError;
pub use error::Result;
pub use event::CheckoutCompletedData;
pub use event::CheckoutCompletedEvent;
pub use event::CheckoutStartedData;
pub use event::CheckoutStartedEvent;
pub use event::CollectionViewedData;
pub use event::CollectionViewedEvent;
pub use event::Context;
pub use event::Event;
pub use event::EventKind;
pub use event::PageViewedEvent;
pub use event::PaymentInfoSubmittedData;
pub use event::PaymentInfoSubmittedEvent;
pub use event::PixelEvent;
pub use event::ProductAddedToCartData;
pub use event::ProductAddedToCartEvent;
pub use event::ProductViewedData;
pub use event::ProductViewedEvent;
pub use event::SearchSubmittedData;
pub use event::SearchSubmittedEvent;
pub use money::Money;
pub use product::CartLine;
pub use product::CartLineCost;
pub use product::Collection;
pub use product::Image;
pub use product::Product;
pub use product::ProductVariant;
pub use product::SearchResult;
