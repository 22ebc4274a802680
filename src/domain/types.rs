//! Strongly-typed value objects used by the veterinarian domain.
//!
//! Identifiers must be positive and names must be trimmed, non-empty and no
//! longer than their database column, so a value that reaches the domain layer
//! can be rendered or serialized without further checks.
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided string exceeds the storage limit.
    #[error("value must be at most {max} characters")]
    TooLong { max: usize },
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(VetId, "Unique identifier for a veterinarian.");
id_newtype!(SpecialtyId, "Unique identifier for a veterinary specialty.");

/// Trims `value` and checks it is non-empty and at most `max` characters long.
fn bounded_trimmed(value: String, max: usize) -> Result<String, TypeConstraintError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TypeConstraintError::EmptyString);
    }
    if trimmed.chars().count() > max {
        return Err(TypeConstraintError::TooLong { max });
    }
    Ok(trimmed.to_string())
}

macro_rules! bounded_name_newtype {
    ($name:ident, $max:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Longest accepted value, in characters.
            pub const MAX_LEN: usize = $max;

            /// Constructs a trimmed, non-empty, length-checked value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                Ok(Self(bounded_trimmed(value.into(), Self::MAX_LEN)?))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

bounded_name_newtype!(VetName, 30, "First or last name of a veterinarian.");
bounded_name_newtype!(SpecialtyName, 80, "Label of a veterinary specialty.");

/// Trimmed, non-blank text used for substring matching on names.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Returns `None` when the input is missing or contains only whitespace.
    pub fn parse(value: Option<&str>) -> Option<Self> {
        value
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for SearchTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(VetId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(SpecialtyId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(VetId::new(7).map(VetId::get), Ok(7));
    }

    #[test]
    fn vet_name_is_trimmed() {
        let name = VetName::new("  Carter ").unwrap();
        assert_eq!(name.as_str(), "Carter");
    }

    #[test]
    fn vet_name_rejects_blank_and_overlong_values() {
        assert_eq!(VetName::new("   "), Err(TypeConstraintError::EmptyString));
        assert_eq!(
            VetName::new("x".repeat(31)),
            Err(TypeConstraintError::TooLong { max: 30 })
        );
        assert!(VetName::new("é".repeat(30)).is_ok());
    }

    #[test]
    fn search_term_treats_whitespace_as_missing() {
        assert_eq!(SearchTerm::parse(None), None);
        assert_eq!(SearchTerm::parse(Some("")), None);
        assert_eq!(SearchTerm::parse(Some(" \t ")), None);
        assert_eq!(
            SearchTerm::parse(Some("  ar ")).map(SearchTerm::into_inner),
            Some("ar".to_string())
        );
    }

    #[test]
    fn names_serialize_as_plain_strings() {
        let json = serde_json::to_string(&VetName::new("Leary").unwrap()).unwrap();
        assert_eq!(json, "\"Leary\"");
    }
}
