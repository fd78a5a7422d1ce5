//! Domain types for generated fixtures
//!
//! These newtypes keep tags, identifiers and counts from degrading into bare
//! strings and integers, and validate anything that crosses a boundary
//! (deserialization, CLI input, custom catalogs).

use nutype::nutype;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::domain::validation_constants::{identifier, prefixes};
use crate::error;

/// A classification label attached to VMs and firewall rules.
///
/// Limited to 100 characters and a conservative character set so tags can
/// double as selectors in the consuming service.
#[nutype(
    validate(
        not_empty,
        len_char_max = 100,
        regex = r"^[a-zA-Z0-9][a-zA-Z0-9:._-]*$"
    ),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Tag(String);

/// Human readable VM name
#[nutype(derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRef, Display))]
pub struct VmName(String);

impl VmName {
    pub fn for_identifier(id: &Identifier) -> Self {
        Self::new(format!("{}{id}", prefixes::VM_NAME))
    }
}

/// Number of records requested for one section of a fixture document
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Hash
))]
pub struct RecordCount(usize);

impl RecordCount {
    /// No records
    pub fn none() -> Self {
        Self::new(0)
    }

    /// Convert a caller supplied signed count, rejecting negatives.
    pub fn try_from_signed(field: &str, value: i64) -> error::Result<Self> {
        usize::try_from(value).map(Self::new).map_err(|_| {
            error::Error::invalid_argument(field, format!("must be non-negative, got {value}"))
        })
    }
}

/// Error returned when a string is not a well-formed identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("identifier must be {min}-{max} hex characters, got {actual}")]
    InvalidLength {
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("identifier must have an even number of hex characters")]
    OddLength,

    #[error("identifier must be lowercase hexadecimal")]
    NotLowercaseHex,

    #[error("expected prefix '{expected}'")]
    MissingPrefix { expected: &'static str },
}

/// Random lowercase hex identifier rendered from 3 to 5 random bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Render random bytes as an identifier. Callers draw between
    /// `MIN_BYTES` and `MAX_BYTES` bytes.
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        Self(hex::encode(bytes))
    }

    pub fn parse(raw: &str) -> std::result::Result<Self, IdentifierError> {
        let len = raw.len();
        if !(identifier::MIN_HEX_LENGTH..=identifier::MAX_HEX_LENGTH).contains(&len) {
            return Err(IdentifierError::InvalidLength {
                min: identifier::MIN_HEX_LENGTH,
                max: identifier::MAX_HEX_LENGTH,
                actual: len,
            });
        }
        if !len.is_multiple_of(2) {
            return Err(IdentifierError::OddLength);
        }
        if !raw.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(IdentifierError::NotLowercaseHex);
        }
        Ok(Self(raw.to_string()))
    }

    /// Number of random bytes the identifier was rendered from
    pub fn byte_len(&self) -> usize {
        self.0.len() / 2
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Record identifier of the form `<prefix><Identifier>`, serialized as a
/// single string.
macro_rules! prefixed_id {
    ($(#[$meta:meta])* $name:ident, $prefix:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(Identifier);

        impl $name {
            pub const PREFIX: &'static str = $prefix;

            pub fn new(id: Identifier) -> Self {
                Self(id)
            }

            pub fn identifier(&self) -> &Identifier {
                &self.0
            }

            pub fn parse(raw: &str) -> std::result::Result<Self, IdentifierError> {
                raw.strip_prefix(Self::PREFIX)
                    .ok_or(IdentifierError::MissingPrefix {
                        expected: Self::PREFIX,
                    })
                    .and_then(Identifier::parse)
                    .map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", Self::PREFIX, self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdentifierError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Self::parse(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

prefixed_id!(
    /// Identifier of a generated virtual machine, e.g. `vm-3fa9c1`
    VmId,
    prefixes::VM_ID
);

prefixed_id!(
    /// Identifier of a generated firewall rule, e.g. `fw-0b77e2d4`
    FwId,
    prefixes::FW_ID
);
