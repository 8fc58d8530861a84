use serde::{Deserialize, Serialize};

use crate::domain::{
    BalanceRecord, ExpiryUnit, Garden, Sats, SessionStatus, StatusEvaluator, Units, UserRecord,
};

use super::AppError;

/// Application service providing high-level status checks.
/// This is the primary interface for any client (CLI, API, TUI, etc.).
pub struct StatusService {
    evaluator: StatusEvaluator,
}

/// Result of checking a user's session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserReport {
    pub user: UserRecord,
    pub status: SessionStatus,
}

impl StatusService {
    /// Create a service classifying with the given evaluator.
    pub fn new(evaluator: StatusEvaluator) -> Self {
        Self { evaluator }
    }

    /// Create a service classifying against a custom threshold.
    pub fn with_threshold(threshold: Units) -> Self {
        Self::new(StatusEvaluator::new(threshold))
    }

    /// Build a user record and classify its remaining validity.
    pub fn check_user(
        &self,
        address: &str,
        expiry: Units,
        unit: ExpiryUnit,
    ) -> Result<UserReport, AppError> {
        let user = UserRecord::new(address, expiry, unit)?;
        let status = self.evaluator.evaluate(&user);
        Ok(UserReport { user, status })
    }

    /// Build a balance record, enforcing the sum invariant.
    pub fn check_balance(
        &self,
        confirmed: Sats,
        unconfirmed: Sats,
        total: Sats,
    ) -> Result<BalanceRecord, AppError> {
        Ok(BalanceRecord::new(confirmed, unconfirmed, total)?)
    }

    /// Build a garden entry, resolving its session status once.
    pub fn build_garden(
        &self,
        name: &str,
        age: u32,
        address: &str,
        expiry: Units,
        unit: ExpiryUnit,
    ) -> Result<Garden, AppError> {
        let user = UserRecord::new(address, expiry, unit)?;
        Ok(Garden::with_evaluator(name, age, &user, &self.evaluator))
    }
}

impl Default for StatusService {
    fn default() -> Self {
        Self::new(StatusEvaluator::default())
    }
}
