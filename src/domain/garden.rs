use std::fmt;

use serde::{Deserialize, Serialize};

use super::{SessionStatus, StatusEvaluator, UserRecord};

/// A garden entry that folds a user's session status into its own display.
/// The status is resolved once, when the entry is built, and cached for the
/// entity's lifetime; rendering never re-evaluates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Garden {
    pub name: String,
    pub age: u32,
    status: SessionStatus,
}

impl Garden {
    /// Build a garden entry for `user`, classifying it with the default
    /// threshold.
    pub fn new(name: impl Into<String>, age: u32, user: &UserRecord) -> Self {
        Self::with_evaluator(name, age, user, &StatusEvaluator::default())
    }

    /// Build a garden entry classifying `user` with the supplied evaluator.
    pub fn with_evaluator(
        name: impl Into<String>,
        age: u32,
        user: &UserRecord,
        evaluator: &StatusEvaluator,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            status: evaluator.evaluate(user),
        }
    }

    /// The session status cached at construction time.
    pub fn status(&self) -> SessionStatus {
        self.status
    }
}

impl fmt::Display for Garden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} and {} is {} years old.",
            self.status.message(),
            self.name,
            self.age
        )
    }
}
