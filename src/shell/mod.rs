//! Presentation-side state that is independent of the web framework.

pub mod panel;
pub mod viewport;

pub use panel::FilterPanel;
pub use viewport::{FilterPresentation, Viewport};
