//! Form definitions backing the board routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod main;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid location code")]
    InvalidCode(#[from] TypeConstraintError),

    #[error("location code longer than {0} characters")]
    CodeTooLong(u64),
}
