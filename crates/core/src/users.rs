//! User profiles and spending summaries.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use costwise_shared::AppError;
use costwise_shared::types::UserId;

use crate::input::parse_integer;

/// Errors raised when looking a user up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserLookupError {
    /// The id is not an integer.
    #[error("Invalid user ID (Must be a number)")]
    InvalidId,

    /// No user has this id.
    #[error("User not found")]
    NotFound(UserId),
}

impl From<UserLookupError> for AppError {
    fn from(err: UserLookupError) -> Self {
        match err {
            UserLookupError::InvalidId => Self::Validation(err.to_string()),
            UserLookupError::NotFound(_) => Self::NotFound(err.to_string()),
        }
    }
}

/// A user profile. Users are created by the seeder, never through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    /// Unique id.
    pub id: UserId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Birthday as entered, e.g. "1990-01-10".
    pub birthday: String,
    /// Marital status as entered, e.g. "single".
    pub marital_status: String,
}

/// A user with the total of all their costs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// User id.
    pub id: UserId,
    /// Sum of every cost recorded for the user, zero if none.
    #[serde(serialize_with = "rust_decimal::serde::arbitrary_precision::serialize")]
    pub total: Decimal,
}

impl UserSummary {
    /// Combines a profile with its aggregated total.
    #[must_use]
    pub fn new(user: User, total: Decimal) -> Self {
        Self {
            first_name: user.first_name,
            last_name: user.last_name,
            id: user.id,
            total,
        }
    }
}

/// Parses the `{id}` path segment of a user lookup.
pub fn parse_user_id(raw: &str) -> Result<UserId, UserLookupError> {
    parse_integer(raw)
        .map(UserId)
        .ok_or(UserLookupError::InvalidId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn mosh() -> User {
        User {
            id: UserId(123_123),
            first_name: "mosh".to_string(),
            last_name: "israeli".to_string(),
            birthday: "1990-01-10".to_string(),
            marital_status: "single".to_string(),
        }
    }

    #[rstest]
    #[case("123123", UserId(123_123))]
    #[case(" 7 ", UserId(7))]
    #[case("7.0", UserId(7))]
    fn test_parse_user_id(#[case] raw: &str, #[case] expected: UserId) {
        assert_eq!(parse_user_id(raw), Ok(expected));
    }

    #[rstest]
    #[case("abc")]
    #[case("notanumber")]
    #[case("")]
    #[case("7.5")]
    fn test_parse_user_id_rejects(#[case] raw: &str) {
        let err = parse_user_id(raw).unwrap_err();
        assert_eq!(err.to_string(), "Invalid user ID (Must be a number)");
    }

    #[test]
    fn test_summary_serialization() {
        let summary = UserSummary::new(mosh(), dec!(62.5));
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({
                "first_name": "mosh",
                "last_name": "israeli",
                "id": 123_123,
                "total": 62.5
            })
        );
    }

    #[test]
    fn test_zero_total_is_a_number() {
        let summary = UserSummary::new(mosh(), Decimal::ZERO);
        assert_eq!(serde_json::to_value(&summary).unwrap()["total"], json!(0));
    }

    #[test]
    fn test_lookup_errors_map_to_status() {
        assert_eq!(AppError::from(UserLookupError::InvalidId).status_code(), 400);
        let not_found = AppError::from(UserLookupError::NotFound(UserId(1)));
        assert_eq!(not_found.status_code(), 404);
        assert_eq!(not_found.message(), "User not found");
    }
}
