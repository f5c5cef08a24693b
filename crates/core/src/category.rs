//! Expense categories.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the five fixed expense classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Groceries, restaurants.
    Food,
    /// Medical and pharmacy.
    Health,
    /// Rent, utilities, maintenance.
    Housing,
    /// Gym, equipment, events.
    Sport,
    /// Tuition, courses, books.
    Education,
}

/// A category name outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Every category, in report order.
    pub const ALL: [Self; 5] = [
        Self::Food,
        Self::Health,
        Self::Housing,
        Self::Sport,
        Self::Education,
    ];

    /// Returns the wire name of the category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Health => "health",
            Self::Housing => "housing",
            Self::Sport => "sport",
            Self::Education => "education",
        }
    }

    /// Comma-separated list of the accepted names.
    #[must_use]
    pub fn allowed_names() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
