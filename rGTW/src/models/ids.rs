//! Type-safe key wrappers.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

macro_rules! define_key {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
        pub struct $name(pub String);

        impl $name {
            /// Create a new key from a string.
            pub fn new(key: impl Into<String>) -> Self {
                $name(key.into())
            }

            /// Check if this key is empty.
            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }

            /// Get the inner string.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        // The API returns keys as JSON strings in some payloads and as bare
        // numbers in others.
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
                super::flexible::string(d).map($name)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name(s.to_owned())
            }
        }

        impl From<&String> for $name {
            fn from(s: &String) -> Self {
                $name(s.clone())
            }
        }

        impl From<&$name> for $name {
            fn from(k: &$name) -> Self {
                k.clone()
            }
        }

        impl From<i64> for $name {
            fn from(n: i64) -> Self {
                $name(n.to_string())
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> Self {
                $name(n.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_key!(WebinarKey, "A webinar key.");
define_key!(SessionKey, "A completed webinar session key.");
define_key!(RegistrantKey, "A registrant key.");
define_key!(PanelistKey, "A panelist key.");
define_key!(CoOrganizerKey, "A co-organizer (member) key.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_creation() {
        let key = WebinarKey::new("1234567890");
        assert_eq!(key.as_str(), "1234567890");
        assert_eq!(format!("{}", key), "1234567890");
    }

    #[test]
    fn test_key_from_int() {
        let key = RegistrantKey::from(5_000_000_000_i64);
        assert_eq!(key.as_str(), "5000000000");
    }

    #[test]
    fn test_key_is_empty() {
        assert!(SessionKey::new("").is_empty());
        assert!(SessionKey::new("  ").is_empty());
        assert!(!SessionKey::new("0").is_empty());
    }

    #[test]
    fn test_key_deserialize_number() {
        let key: WebinarKey = serde_json::from_str("8281111111111111111").unwrap();
        assert_eq!(key.as_str(), "8281111111111111111");

        let key: WebinarKey = serde_json::from_str("\"123\"").unwrap();
        assert_eq!(key, WebinarKey::from("123"));
    }
}
