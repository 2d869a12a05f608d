//! Domain types of the order board.

pub mod catalog;
pub mod filter;
pub mod order;
pub mod query;
pub mod types;
