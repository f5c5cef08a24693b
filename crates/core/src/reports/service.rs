//! Report generation service.

use chrono::Datelike;

use super::types::{CategoryCosts, MonthlyReport, ReportEntry, ReportRequest};
use crate::cost::Cost;

/// Service for generating monthly reports.
pub struct ReportService;

impl ReportService {
    /// Groups `costs` into the five categories.
    ///
    /// `costs` is expected to be the store's answer for `request.range`, in
    /// retrieval order; that order is kept within each category.
    #[must_use]
    pub fn build<I>(request: &ReportRequest, costs: I) -> MonthlyReport
    where
        I: IntoIterator<Item = Cost>,
    {
        let mut grouped = CategoryCosts::default();

        for cost in costs {
            grouped.get_mut(cost.category).push(ReportEntry {
                sum: cost.sum,
                day: cost.created_at.day(),
                description: cost.description,
            });
        }

        MonthlyReport {
            userid: request.user_id,
            year: request.year,
            month: request.month,
            costs: grouped,
        }
    }
}
