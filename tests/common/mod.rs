// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use vigilo::application::StatusService;
use vigilo::domain::{ExpiryUnit, Units, UserRecord};

/// Address used throughout the fixtures
pub const SAMPLE_ADDRESS: &str = "0xE1CA48fcaFBD42Da402352b645A9855E33C716BE";

/// Helper to build a valid user record with the expiry expressed in seconds
pub fn sample_user(expiry: Units) -> UserRecord {
    UserRecord::new(SAMPLE_ADDRESS, expiry, ExpiryUnit::Seconds).unwrap()
}

/// Helper to create a service with the default threshold
pub fn test_service() -> StatusService {
    StatusService::default()
}
