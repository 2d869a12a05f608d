//! Fixed location catalog offered as filter suggestions.

use serde::Serialize;

use crate::domain::filter::FilterCategory;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct Location {
    pub code: &'static str,
    pub name: &'static str,
}

const fn location(code: &'static str, name: &'static str) -> Location {
    Location { code, name }
}

pub const ORIGINS: &[Location] = &[
    location("BDG", "BANDUNG"),
    location("JKT", "JAKARTA"),
    location("SBY", "SURABAYA"),
    location("MLG", "MALANG"),
    location("DPS", "DENPASAR"),
];

pub const DESTINATIONS: &[Location] = &[
    location("MDN", "MEDAN"),
    location("PKU", "PEKANBARU"),
    location("BJM", "BANJARMASIN"),
    location("PLB", "PALEMBANG"),
    location("BJM2", "BANJARMASIN 2"),
];

pub fn locations(category: FilterCategory) -> &'static [Location] {
    match category {
        FilterCategory::Origin => ORIGINS,
        FilterCategory::Destination => DESTINATIONS,
    }
}

/// Catalog entries whose name contains `term`, ignoring case.
///
/// A blank term returns the whole list.
pub fn search(category: FilterCategory, term: &str) -> Vec<Location> {
    let needle = term.trim().to_lowercase();
    locations(category)
        .iter()
        .filter(|location| needle.is_empty() || location.name.to_lowercase().contains(&needle))
        .copied()
        .collect()
}
