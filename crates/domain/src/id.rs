//! Typed identifier newtypes backed by the server's string identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident, $missing:expr) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Parse user input, trimming surrounding whitespace.
            ///
            /// # Errors
            ///
            /// Returns a [`ValidationError`] when the trimmed input is empty.
            pub fn parse(input: &str) -> Result<Self, ValidationError> {
                let trimmed = input.trim();
                if trimmed.is_empty() {
                    return Err($missing);
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Access the identifier as a string slice.
            #[must_use]
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
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a land plot, as typed into the kingdom view.
    LandId,
    ValidationError::MissingLandId
);

define_id!(
    /// Identifier of a kingdom contributing to a land.
    KingdomId,
    ValidationError::MissingKingdomId
);
