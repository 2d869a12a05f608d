//! View data handed to templates and JSON bodies returned by the API.

pub mod api;
pub mod main;
