use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Units, UserRecord};

/// Sessions with less than this much remaining validity are classified as
/// expiring. The threshold is compared against `expiry` in whatever unit
/// the record declares.
pub const EXPIRY_THRESHOLD: Units = 1000;

/// Classification of a user session's remaining validity.
/// Derived from a [`UserRecord`] on demand, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Expiring,
    Healthy,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Expiring => "expiring",
            SessionStatus::Healthy => "healthy",
        }
    }

    /// Fixed human-readable message for this classification.
    pub fn message(&self) -> &'static str {
        match self {
            SessionStatus::Expiring => "User token will expire soon",
            SessionStatus::Healthy => "User has a lot of time",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies user records against an expiry threshold.
/// The default evaluator uses [`EXPIRY_THRESHOLD`]; a custom threshold can
/// be supplied without changing the comparison rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEvaluator {
    threshold: Units,
}

impl StatusEvaluator {
    pub fn new(threshold: Units) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> Units {
        self.threshold
    }

    /// Classify the record's remaining validity. The comparison is strict:
    /// an expiry exactly equal to the threshold is healthy.
    pub fn evaluate(&self, user: &UserRecord) -> SessionStatus {
        if user.expiry < self.threshold {
            SessionStatus::Expiring
        } else {
            SessionStatus::Healthy
        }
    }
}

impl Default for StatusEvaluator {
    fn default() -> Self {
        Self::new(EXPIRY_THRESHOLD)
    }
}

/// Classify a user record with the default threshold.
pub fn evaluate_status(user: &UserRecord) -> SessionStatus {
    StatusEvaluator::default().evaluate(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExpiryUnit;

    fn user(expiry: Units) -> UserRecord {
        UserRecord::new("addr", expiry, ExpiryUnit::Seconds).unwrap()
    }

    #[test]
    fn test_below_threshold_is_expiring() {
        assert_eq!(evaluate_status(&user(999)), SessionStatus::Expiring);
        assert_eq!(evaluate_status(&user(500)), SessionStatus::Expiring);
        assert_eq!(evaluate_status(&user(0)), SessionStatus::Expiring);
    }

    #[test]
    fn test_at_threshold_is_healthy() {
        assert_eq!(evaluate_status(&user(1000)), SessionStatus::Healthy);
    }

    #[test]
    fn test_above_threshold_is_healthy() {
        assert_eq!(evaluate_status(&user(2700)), SessionStatus::Healthy);
        assert_eq!(evaluate_status(&user(27000)), SessionStatus::Healthy);
    }

    #[test]
    fn test_custom_threshold() {
        let evaluator = StatusEvaluator::new(3000);
        assert_eq!(evaluator.threshold(), 3000);
        assert_eq!(evaluator.evaluate(&user(2700)), SessionStatus::Expiring);
        assert_eq!(evaluator.evaluate(&user(3000)), SessionStatus::Healthy);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let record = user(999);
        assert_eq!(evaluate_status(&record), evaluate_status(&record));
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(
            SessionStatus::Expiring.message(),
            "User token will expire soon"
        );
        assert_eq!(SessionStatus::Healthy.message(), "User has a lot of time");
    }

    #[test]
    fn test_status_as_str() {
        assert_eq!(SessionStatus::Expiring.as_str(), "expiring");
        assert_eq!(SessionStatus::Healthy.as_str(), "healthy");
    }
}
