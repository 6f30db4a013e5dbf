use crate::money::Money;
use crate::product::ProductVariant;

record! {
    /// Container for everything required to check out items and pay.
    pub struct Checkout {
        /// Attributes accumulated throughout the checkout process.
        pub attributes: Vec<Attribute>,
        pub currency_code: String,
        pub email: String,
        pub line_items: Vec<CheckoutLineItem>,
        /// Resulting order of a paid checkout. Zero-valued while the checkout
        /// is in progress.
        pub order: Order,
        /// E.164 formatted, for example `+16135551111`.
        pub phone: String,
        pub shipping_address: MailingAddress,
        /// Shipping rate selected by the customer.
        pub shipping_line: ShippingRate,
        /// Price before duties, shipping and taxes.
        pub subtotal_price: Money,
        /// Unique identifier of the checkout.
        pub token: String,
        /// Sum of all item prices including duties, taxes and discounts.
        pub total_price: Money,
        /// Sum of all taxes applied to line items and shipping lines.
        pub total_tax: Money,
    }
}

record! {
    pub struct MailingAddress {
        /// Street address or P.O. box.
        pub address1: String,
        /// Apartment, suite or unit.
        pub address2: String,
        pub city: String,
        pub country: String,
        /// ISO 3166-1 alpha-2.
        pub country_code: String,
        pub phone: String,
        pub province: String,
        pub province_code: String,
        pub zip: String,
    }
}

record! {
    pub struct ShippingRate {
        pub price: Money,
    }
}

record! {
    pub struct Order {
        pub id: String,
    }
}

record! {
    pub struct Attribute {
        pub key: String,
        pub value: String,
    }
}

record! {
    pub struct CheckoutLineItem {
        pub id: String,
        pub quantity: i64,
        #[serde(skip_serializing_if = "String::is_empty")]
        pub title: String,
        #[serde(skip_serializing_if = "ProductVariant::is_empty")]
        pub variant: ProductVariant,
    }
}
