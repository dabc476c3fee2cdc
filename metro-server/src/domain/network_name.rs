//! Network name type.

use std::fmt;

use super::normalize;

/// Error returned when parsing an invalid network name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid network name: {reason}")]
pub struct InvalidNetworkName {
    reason: &'static str,
}

/// A valid network name, such as `stgo`.
///
/// Network names select a dataset on disk, so they are restricted to
/// lowercase ASCII letters, digits, `-` and `_`. This type guarantees that
/// any `NetworkName` value is safe to use as a file stem.
///
/// # Examples
///
/// ```
/// use metro_server::domain::NetworkName;
///
/// let stgo = NetworkName::parse("stgo").unwrap();
/// assert_eq!(stgo.as_str(), "stgo");
///
/// // Uppercase is rejected by `parse` but accepted by `parse_normalized`
/// assert!(NetworkName::parse("STGO").is_err());
/// assert!(NetworkName::parse_normalized(" STGO ").is_ok());
///
/// // Path separators are rejected
/// assert!(NetworkName::parse("../stgo").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetworkName(String);

impl NetworkName {
    /// Parse a network name from an already-normalized string.
    pub fn parse(s: &str) -> Result<Self, InvalidNetworkName> {
        if s.is_empty() {
            return Err(InvalidNetworkName {
                reason: "must not be empty",
            });
        }

        if s.len() > 64 {
            return Err(InvalidNetworkName {
                reason: "must be at most 64 characters",
            });
        }

        let valid = s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_');
        if !valid {
            return Err(InvalidNetworkName {
                reason: "must contain only a-z, 0-9, '-' and '_'",
            });
        }

        Ok(NetworkName(s.to_string()))
    }

    /// Normalize free text (accents, case, surrounding whitespace) and parse it.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidNetworkName> {
        Self::parse(&normalize(s))
    }

    /// Returns the network name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NetworkName({})", self.0)
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
