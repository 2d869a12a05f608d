use serde::Deserialize;
use validator::Validate;

use crate::domain::filter::FilterCategory;
use crate::domain::types::LocationCode;
use crate::forms::FormError;

/// Longest keyword accepted from the search box.
pub const MAX_KEYWORD_LENGTH: u64 = 100;

/// Longest location code accepted from the filter form or the API.
pub const MAX_LOCATION_CODE_LENGTH: u64 = 16;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchForm {
    #[serde(default)]
    #[validate(length(max = MAX_KEYWORD_LENGTH))]
    pub keyword: Option<String>,
}

impl SearchForm {
    /// Validated keyword with surrounding whitespace removed. A missing
    /// keyword is the empty keyword.
    pub fn keyword(&self) -> Result<String, FormError> {
        self.validate()?;
        Ok(self
            .keyword
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string())
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ToggleFilterForm {
    pub category: FilterCategory,
    #[validate(length(min = 1, max = MAX_LOCATION_CODE_LENGTH))]
    pub code: String,
}

impl ToggleFilterForm {
    pub fn code(&self) -> Result<LocationCode, FormError> {
        self.validate()?;
        location_code(&self.code)
    }
}

/// Non-blank location code of at most [`MAX_LOCATION_CODE_LENGTH`]
/// characters, trimmed.
pub fn location_code(raw: &str) -> Result<LocationCode, FormError> {
    let code = LocationCode::new(raw)?;
    if code.as_str().chars().count() as u64 > MAX_LOCATION_CODE_LENGTH {
        return Err(FormError::CodeTooLong(MAX_LOCATION_CODE_LENGTH));
    }
    Ok(code)
}

/// Tab switch and catalog search inside the filter panel.
#[derive(Debug, Default, Deserialize)]
pub struct FilterTabQuery {
    pub tab: Option<FilterCategory>,
    pub find: Option<String>,
}
