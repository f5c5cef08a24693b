//! Cost records and ingestion validation.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use costwise_shared::AppError;
use costwise_shared::types::{Amount, CostId, UserId};

use crate::category::Category;
use crate::input::{decimal_from_json, integer_from_json, is_falsy};

/// Errors raised while validating a cost draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CostValidationError {
    /// One of description, category, userid or sum is missing or falsy.
    #[error("Missing required fields")]
    MissingFields,

    /// `userid` is not an integer or `sum` is not a number.
    #[error("Invalid number values for userid or sum")]
    InvalidNumbers,

    /// `sum` is zero or negative.
    #[error("Sum must be a positive number (Greater than 0)")]
    NonPositiveSum,

    /// `description` is not a non-blank string.
    #[error("Description must be a non-empty string")]
    InvalidDescription,

    /// `category` is outside the closed set.
    #[error("Invalid category. Must be one of: {}", Category::allowed_names())]
    InvalidCategory,

    /// `created_at` could not be read as a timestamp.
    #[error("Invalid created_at timestamp")]
    InvalidTimestamp,
}

impl From<CostValidationError> for AppError {
    fn from(err: CostValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Unvalidated cost as received from a client.
///
/// Every field is kept as raw JSON so that numbers sent as strings, missing
/// fields and wrongly typed fields can all be reported precisely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostDraft {
    /// Free-text description.
    #[serde(default)]
    pub description: Option<Value>,
    /// Category name.
    #[serde(default)]
    pub category: Option<Value>,
    /// Owning user id.
    #[serde(default)]
    pub userid: Option<Value>,
    /// Amount spent.
    #[serde(default)]
    pub sum: Option<Value>,
    /// Optional timestamp; defaults to the ingestion time.
    #[serde(default)]
    pub created_at: Option<Value>,
}

/// A validated cost, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCost {
    /// Free-text description.
    pub description: String,
    /// Category.
    pub category: Category,
    /// Owning user.
    pub user_id: UserId,
    /// Amount spent.
    pub sum: Amount,
    /// When the expense happened.
    pub created_at: DateTime<Utc>,
}

/// A persisted cost record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cost {
    /// Store-assigned identifier.
    pub id: CostId,
    /// Free-text description.
    pub description: String,
    /// Category.
    pub category: Category,
    /// Owning user.
    #[serde(rename = "userid")]
    pub user_id: UserId,
    /// Amount spent.
    pub sum: Amount,
    /// When the expense happened.
    pub created_at: DateTime<Utc>,
}

impl Cost {
    /// Builds the stored record for `new` under the given id.
    #[must_use]
    pub fn from_new(id: CostId, new: NewCost) -> Self {
        Self {
            id,
            description: new.description,
            category: new.category,
            user_id: new.user_id,
            sum: new.sum,
            created_at: new.created_at,
        }
    }
}

impl CostDraft {
    /// Validates the draft. `now` is used when no timestamp was supplied.
    ///
    /// Checks run in a fixed order: required fields, numeric fields, sum sign,
    /// description, category, timestamp. The first failure is reported.
    pub fn validate(self, now: DateTime<Utc>) -> Result<NewCost, CostValidationError> {
        let required = [
            self.description.as_ref(),
            self.category.as_ref(),
            self.userid.as_ref(),
            self.sum.as_ref(),
        ];
        if required.into_iter().any(is_falsy) {
            return Err(CostValidationError::MissingFields);
        }

        let user_id = self.userid.as_ref().and_then(integer_from_json);
        let sum = self.sum.as_ref().and_then(decimal_from_json);
        let (Some(user_id), Some(sum)) = (user_id, sum) else {
            return Err(CostValidationError::InvalidNumbers);
        };

        let sum = Amount::new(sum).ok_or(CostValidationError::NonPositiveSum)?;

        let description = match self.description {
            Some(Value::String(s)) if !s.trim().is_empty() => s,
            _ => return Err(CostValidationError::InvalidDescription),
        };

        let category = match &self.category {
            Some(Value::String(s)) => {
                Category::from_str(s).map_err(|_| CostValidationError::InvalidCategory)?
            }
            _ => return Err(CostValidationError::InvalidCategory),
        };

        let created_at = if is_falsy(self.created_at.as_ref()) {
            now
        } else {
            self.created_at
                .as_ref()
                .and_then(parse_timestamp)
                .ok_or(CostValidationError::InvalidTimestamp)?
        };

        Ok(NewCost {
            description,
            category,
            user_id: UserId(user_id),
            sum,
            created_at,
        })
    }
}

/// Reads a timestamp from JSON.
///
/// Strings may be RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.fff]` (taken as UTC)
/// or a bare date (midnight UTC). Numbers are milliseconds since the epoch.
#[must_use]
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                        .ok()
                        .map(|dt| dt.and_utc())
                })
                .or_else(|| {
                    NaiveDate::parse_from_str(s, "%Y-%m-%d")
                        .ok()
                        .and_then(|d| d.and_hms_opt(0, 0, 0))
                        .map(|dt| dt.and_utc())
                })
        }
        Value::Number(_) => integer_from_json(value).and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}
