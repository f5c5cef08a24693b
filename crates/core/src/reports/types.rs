//! Report data types.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use costwise_shared::types::{Amount, UserId};

use super::error::ReportError;
use crate::category::Category;
use crate::input::parse_integer;

/// Raw report query parameters, as received.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportParams {
    /// User id.
    pub id: Option<String>,
    /// Calendar year.
    pub year: Option<String>,
    /// Calendar month, 1-12.
    pub month: Option<String>,
}

/// Earliest year a report can cover; PostgreSQL `TIMESTAMPTZ` starts in 4713 BC.
pub const MIN_REPORT_YEAR: i32 = -4712;

/// UTC bounds of a calendar month, as the half-open interval
/// `[start, next_start)`.
///
/// Every instant of the month is inside, at any sub-second precision, and the
/// first instant of the next month is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    start: DateTime<Utc>,
    next_start: DateTime<Utc>,
}

impl MonthRange {
    /// Computes the bounds of `month` in `year`.
    pub fn new(year: i32, month: u32) -> Result<Self, ReportError> {
        if !(1..=12).contains(&month) {
            return Err(ReportError::MonthOutOfRange(i64::from(month)));
        }
        let out_of_range = || ReportError::YearOutOfRange(i64::from(year));
        if year < MIN_REPORT_YEAR {
            return Err(out_of_range());
        }

        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
        let (next_year, next_month) = if month == 12 {
            (year.checked_add(1).ok_or_else(out_of_range)?, 1)
        } else {
            (year, month + 1)
        };
        let next = NaiveDate::from_ymd_opt(next_year, next_month, 1).ok_or_else(out_of_range)?;

        Ok(Self {
            start: first.and_time(NaiveTime::MIN).and_utc(),
            next_start: next.and_time(NaiveTime::MIN).and_utc(),
        })
    }

    /// First instant of the month.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// First instant of the following month (excluded).
    #[must_use]
    pub const fn next_start(&self) -> DateTime<Utc> {
        self.next_start
    }

    /// Returns true if `at` falls within the month.
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at < self.next_start
    }
}

/// A validated report request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRequest {
    /// User whose costs are reported.
    pub user_id: UserId,
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Bounds of the month.
    pub range: MonthRange,
}

impl ReportRequest {
    /// Validates raw query parameters.
    ///
    /// The month is checked before id and year, so an out-of-range month is
    /// reported whatever the other values are.
    pub fn from_params(params: &ReportParams) -> Result<Self, ReportError> {
        let present = |value: &Option<String>| -> Option<String> {
            value.as_deref().map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
        };
        let (Some(id), Some(year), Some(month)) = (
            present(&params.id),
            present(&params.year),
            present(&params.month),
        ) else {
            return Err(ReportError::MissingParameters);
        };

        let month = parse_integer(&month).ok_or(ReportError::InvalidNumber)?;
        let month = u32::try_from(month)
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or(ReportError::MonthOutOfRange(month))?;

        let id = parse_integer(&id).ok_or(ReportError::InvalidNumber)?;
        let year = parse_integer(&year).ok_or(ReportError::InvalidNumber)?;
        let year = i32::try_from(year).map_err(|_| ReportError::YearOutOfRange(year))?;

        Self::new(UserId(id), year, month)
    }

    /// Builds a request from already typed values.
    pub fn new(user_id: UserId, year: i32, month: u32) -> Result<Self, ReportError> {
        Ok(Self {
            user_id,
            year,
            month,
            range: MonthRange::new(year, month)?,
        })
    }
}

/// One cost as it appears in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// Amount spent.
    pub sum: Amount,
    /// Day of the month the cost was recorded on.
    pub day: u32,
    /// Free-text description.
    pub description: String,
}

/// Report entries keyed by category. All five categories are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCosts {
    /// Food entries.
    pub food: Vec<ReportEntry>,
    /// Health entries.
    pub health: Vec<ReportEntry>,
    /// Housing entries.
    pub housing: Vec<ReportEntry>,
    /// Sport entries.
    pub sport: Vec<ReportEntry>,
    /// Education entries.
    pub education: Vec<ReportEntry>,
}

impl CategoryCosts {
    /// Entries of one category.
    #[must_use]
    pub fn get(&self, category: Category) -> &[ReportEntry] {
        match category {
            Category::Food => &self.food,
            Category::Health => &self.health,
            Category::Housing => &self.housing,
            Category::Sport => &self.sport,
            Category::Education => &self.education,
        }
    }

    /// Mutable entries of one category.
    pub fn get_mut(&mut self, category: Category) -> &mut Vec<ReportEntry> {
        match category {
            Category::Food => &mut self.food,
            Category::Health => &mut self.health,
            Category::Housing => &mut self.housing,
            Category::Sport => &mut self.sport,
            Category::Education => &mut self.education,
        }
    }

    /// Number of entries across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    /// Returns true if no category has entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Costs of one user for one month, grouped by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyReport {
    /// User the report belongs to.
    pub userid: UserId,
    /// Calendar year.
    pub year: i32,
    /// Calendar month.
    pub month: u32,
    /// Grouped entries.
    pub costs: CategoryCosts,
}
