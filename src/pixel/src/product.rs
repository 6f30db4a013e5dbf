use crate::money::Money;

record! {
    pub struct Image {
        pub src: String,
    }
}

record! {
    pub struct Product {
        pub id: String,
        pub title: String,
        pub vendor: String,
        #[serde(rename = "type")]
        pub product_type: String,
    }
}

record! {
    /// A purchasable variant of a product, such as a size or colour.
    pub struct ProductVariant {
        pub id: String,
        pub image: Image,
        pub price: Money,
        pub product: Product,
        pub sku: String,
        pub title: String,
    }
}

impl ProductVariant {
    /// True when every field holds its zero value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

record! {
    pub struct Collection {
        pub id: String,
        pub title: String,
        pub product_variants: Vec<ProductVariant>,
    }
}

record! {
    /// Metadata of a storefront search.
    pub struct SearchResult {
        /// The query that was executed.
        pub query: String,
        /// Variants returned by the query, in result order.
        pub product_variants: Vec<ProductVariant>,
    }
}

record! {
    pub struct CartLineCost {
        pub total_amount: Money,
    }
}

record! {
    pub struct CartLine {
        pub cost: CartLineCost,
        pub merchandise: ProductVariant,
        pub quantity: i64,
    }
}
