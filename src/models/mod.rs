//! Models shared between services and routes.

pub mod config;
pub mod session;
