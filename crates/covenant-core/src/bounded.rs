//! Length-bounded string newtypes.
//!
//! Every free-form string the ledger accepts has a byte-length bound
//! enforced at construction, so downstream code never re-validates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

macro_rules! bounded_string {
    ($(#[$doc:meta])* $name:ident, $field:literal, $max:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Maximum length in bytes.
            pub const MAX_LEN: usize = $max;

            /// Construct, rejecting values longer than [`Self::MAX_LEN`] bytes.
            pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
                let value = value.into();
                if value.len() > Self::MAX_LEN {
                    return Err(CoreError::ValueTooLong {
                        field: $field,
                        max: Self::MAX_LEN,
                        actual: value.len(),
                    });
                }
                Ok(Self(value))
            }

            /// View as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

bounded_string!(
    /// Identifier of a resource or device, unique per owner.
    ResourceId,
    "resource id",
    64
);

bounded_string!(
    /// Free-form kind tag of a registered resource.
    ResourceType,
    "resource type",
    64
);

bounded_string!(
    /// Free-form kind tag of a verified accessor.
    AccessorType,
    "accessor type",
    64
);

bounded_string!(
    /// Stated purpose of an access event, recorded in the audit trail.
    Purpose,
    "purpose",
    128
);
