//! Services glue the controller and the filter panel to the web layer.

use thiserror::Error;

use crate::forms::FormError;

pub mod api;
pub mod main;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Form(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
