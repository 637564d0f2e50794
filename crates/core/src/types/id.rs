//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing identifiers from different entity types. Catalog and
//! cart identifiers are opaque strings (the catalog backend assigns document
//! ids, color codes come from product data).

use rand::{Rng, distr::Alphanumeric};

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use smilebrush_core::define_id;
/// define_id!(ProductId);
/// define_id!(ColorCode);
///
/// let product = ProductId::new("sonic-pro-x1");
/// let color = ColorCode::new("midnight-blue");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = color;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(ColorCode);
define_id!(LineItemId);

/// Length of the random suffix appended to generated line item ids.
const ID_SUFFIX_LEN: usize = 6;

impl LineItemId {
    /// Generate a fresh line item id for a product.
    ///
    /// The id is a composite of product id, creation timestamp (millis) and a
    /// random alphanumeric suffix. Unique by construction; never recomputed
    /// after creation.
    #[must_use]
    pub fn generate(product_id: &ProductId) -> Self {
        let suffix: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(ID_SUFFIX_LEN)
            .map(char::from)
            .collect();
        Self(format!(
            "{}_{}_{}",
            product_id.as_str(),
            chrono::Utc::now().timestamp_millis(),
            suffix
        ))
    }
}
