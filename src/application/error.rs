use thiserror::Error;

use crate::domain::{BalanceRecordError, Sats, UserRecordError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Inconsistent balance: total {total} does not equal confirmed {confirmed} + unconfirmed {unconfirmed}")]
    InconsistentBalance {
        confirmed: Sats,
        unconfirmed: Sats,
        total: Sats,
    },
}

impl From<UserRecordError> for AppError {
    fn from(err: UserRecordError) -> Self {
        AppError::InvalidArgument(err.to_string())
    }
}

impl From<BalanceRecordError> for AppError {
    fn from(err: BalanceRecordError) -> Self {
        match err {
            e @ BalanceRecordError::NegativeAmount { .. } => {
                AppError::InvalidArgument(e.to_string())
            }
            BalanceRecordError::InconsistentTotal {
                confirmed,
                unconfirmed,
                total,
            } => AppError::InconsistentBalance {
                confirmed,
                unconfirmed,
                total,
            },
        }
    }
}
