use std::fmt;

use serde::{Deserialize, Serialize};

/// Amounts are integer satoshis to avoid floating-point precision issues.
pub type Sats = i64;

/// An account balance split into confirmed and unconfirmed funds.
/// The caller supplies all three quantities - `total` is never recomputed
/// here - but construction fails unless it equals the sum of the parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRecord {
    pub confirmed: Sats,
    pub unconfirmed: Sats,
    pub total: Sats,
}

impl BalanceRecord {
    pub fn new(
        confirmed: Sats,
        unconfirmed: Sats,
        total: Sats,
    ) -> Result<Self, BalanceRecordError> {
        for (field, value) in [
            ("confirmed", confirmed),
            ("unconfirmed", unconfirmed),
            ("total", total),
        ] {
            if value < 0 {
                return Err(BalanceRecordError::NegativeAmount { field, value });
            }
        }
        match confirmed.checked_add(unconfirmed) {
            Some(sum) if sum == total => Ok(Self {
                confirmed,
                unconfirmed,
                total,
            }),
            _ => Err(BalanceRecordError::InconsistentTotal {
                confirmed,
                unconfirmed,
                total,
            }),
        }
    }
}

impl fmt::Display for BalanceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} confirmed, {} unconfirmed, total {}.",
            self.confirmed, self.unconfirmed, self.total
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceRecordError {
    NegativeAmount {
        field: &'static str,
        value: Sats,
    },
    InconsistentTotal {
        confirmed: Sats,
        unconfirmed: Sats,
        total: Sats,
    },
}

impl fmt::Display for BalanceRecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceRecordError::NegativeAmount { field, value } => {
                write!(f, "{} must be non-negative, got {}", field, value)
            }
            BalanceRecordError::InconsistentTotal {
                confirmed,
                unconfirmed,
                total,
            } => {
                write!(
                    f,
                    "total {} does not equal confirmed {} + unconfirmed {}",
                    total, confirmed, unconfirmed
                )
            }
        }
    }
}

impl std::error::Error for BalanceRecordError {}
