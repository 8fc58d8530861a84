use std::fmt;

use serde::{Deserialize, Serialize};

/// Remaining session validity is an integer count of whole units.
/// The unit itself travels with the record (see [`ExpiryUnit`]), so a bare
/// number never crosses a module boundary without its meaning.
pub type Units = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryUnit {
    Seconds,
    Minutes,
}

impl ExpiryUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryUnit::Seconds => "seconds",
            ExpiryUnit::Minutes => "minutes",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "seconds" => Some(ExpiryUnit::Seconds),
            "minutes" => Some(ExpiryUnit::Minutes),
            _ => None,
        }
    }
}

impl fmt::Display for ExpiryUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A user identity/session record. Records are immutable - the only way to
/// obtain one is [`UserRecord::new`], which validates its inputs, and no
/// operation mutates a record after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque identifier (e.g. a wallet address)
    pub address: String,
    /// Remaining validity, expressed in `unit`
    pub expiry: Units,
    /// Unit `expiry` is expressed in; callers must declare it explicitly
    pub unit: ExpiryUnit,
}

impl UserRecord {
    pub fn new(
        address: impl Into<String>,
        expiry: Units,
        unit: ExpiryUnit,
    ) -> Result<Self, UserRecordError> {
        let address = address.into();
        if address.is_empty() {
            return Err(UserRecordError::EmptyAddress);
        }
        if expiry < 0 {
            return Err(UserRecordError::NegativeExpiry(expiry));
        }
        Ok(Self {
            address,
            expiry,
            unit,
        })
    }
}

impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User {} at {} {}.", self.address, self.expiry, self.unit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRecordError {
    EmptyAddress,
    NegativeExpiry(Units),
}

impl fmt::Display for UserRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRecordError::EmptyAddress => write!(f, "address must not be empty"),
            UserRecordError::NegativeExpiry(expiry) => {
                write!(f, "expiry must be non-negative, got {}", expiry)
            }
        }
    }
}

impl std::error::Error for UserRecordError {}
