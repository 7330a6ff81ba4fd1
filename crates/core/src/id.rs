//! Strongly-typed identifiers used across the domain.
//!
//! Identifiers are free-form strings chosen by the user (e.g. `"P1"`). They are
//! serialized transparently so the persisted JSON stays a plain string, both as
//! a mapping key and as an embedded field.

use core::borrow::Borrow;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product (stock-keeping unit).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

/// Identifier of a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(String);

macro_rules! impl_string_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap an identifier as-is.
            ///
            /// No normalization is applied; use `str::parse` for user input.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::invalid_id(format!("{}: cannot be blank", $name)));
                }
                Ok(Self(trimmed.to_owned()))
            }
        }
    };
}

impl_string_newtype!(ProductId, "ProductId");
impl_string_newtype!(SupplierId, "SupplierId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let id: ProductId = "  P1 \n".parse().unwrap();
        assert_eq!(id.as_str(), "P1");
    }

    #[test]
    fn parse_rejects_blank_input() {
        let err = "   ".parse::<SupplierId>().unwrap_err();
        match err {
            DomainError::InvalidId(msg) => assert!(msg.starts_with("SupplierId")),
            other => panic!("Expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = ProductId::new("SKU-42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"SKU-42\"");
        let back: ProductId = serde_json::from_str("\"SKU-42\"").unwrap();
        assert_eq!(back, id);
    }
}
