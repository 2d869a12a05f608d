//! Origin/destination filter selection.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Which side of the shipment a filter code constrains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCategory {
    #[default]
    Origin,
    Destination,
}

impl FilterCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterCategory::Origin => "origin",
            FilterCategory::Destination => "destination",
        }
    }
}

impl Display for FilterCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterCategory {
    type Err = TypeConstraintError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "origin" | "origin_code" => Ok(FilterCategory::Origin),
            "destination" | "destination_code" => Ok(FilterCategory::Destination),
            "" => Err(TypeConstraintError::EmptyString),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// Selected origin and destination codes.
///
/// Codes are opaque: nothing here checks them against the location catalog.
/// Sets are ordered, so equality is structural and independent of the order
/// in which codes were toggled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    origin_codes: BTreeSet<String>,
    destination_codes: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from explicit code lists.
    pub fn from_codes<O, D>(origin_codes: O, destination_codes: D) -> Self
    where
        O: IntoIterator,
        O::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            origin_codes: origin_codes.into_iter().map(Into::into).collect(),
            destination_codes: destination_codes.into_iter().map(Into::into).collect(),
        }
    }

    fn set(&self, category: FilterCategory) -> &BTreeSet<String> {
        match category {
            FilterCategory::Origin => &self.origin_codes,
            FilterCategory::Destination => &self.destination_codes,
        }
    }

    fn set_mut(&mut self, category: FilterCategory) -> &mut BTreeSet<String> {
        match category {
            FilterCategory::Origin => &mut self.origin_codes,
            FilterCategory::Destination => &mut self.destination_codes,
        }
    }

    /// Inserts `code` when absent, removes it when present.
    ///
    /// Returns whether the code is selected afterwards.
    pub fn toggle(&mut self, category: FilterCategory, code: impl Into<String>) -> bool {
        let code = code.into();
        let codes = self.set_mut(category);
        if codes.remove(&code) {
            false
        } else {
            codes.insert(code);
            true
        }
    }

    pub fn contains(&self, category: FilterCategory, code: &str) -> bool {
        self.set(category).contains(code)
    }

    /// Clears both sets.
    pub fn reset_all(&mut self) {
        self.origin_codes.clear();
        self.destination_codes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.origin_codes.is_empty() && self.destination_codes.is_empty()
    }

    pub fn count(&self, category: FilterCategory) -> usize {
        self.set(category).len()
    }

    pub fn origin_codes(&self) -> Vec<String> {
        self.origin_codes.iter().cloned().collect()
    }

    pub fn destination_codes(&self) -> Vec<String> {
        self.destination_codes.iter().cloned().collect()
    }
}
