use serde::Serialize;

/// Narrowest viewport, in CSS pixels, that gets the desktop layout.
pub const DESKTOP_BREAKPOINT: u32 = 1024;

/// How the filter form is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterPresentation {
    /// Anchored next to the filter button; closes after a successful apply.
    Popover,
    /// Full-height panel over a dimmed overlay; outside clicks dismiss it.
    Sidebar,
}

/// Viewport width as reported by the browser, when it reports one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    width: Option<u32>,
}

impl Viewport {
    pub fn new(width: Option<u32>) -> Self {
        Self { width }
    }

    /// Parses a client-hint header value such as `"1280"` or `"412.5"`.
    pub fn from_hint(value: Option<&str>) -> Self {
        let width = value
            .map(str::trim)
            .and_then(|raw| raw.parse::<f64>().ok())
            .filter(|width| width.is_finite() && *width > 0.0)
            .map(|width| width as u32);
        Self { width }
    }

    pub fn width(&self) -> Option<u32> {
        self.width
    }

    /// Unknown widths get the desktop layout.
    pub fn is_desktop(&self) -> bool {
        self.width.is_none_or(|width| width >= DESKTOP_BREAKPOINT)
    }

    pub fn filter_presentation(&self) -> FilterPresentation {
        if self.is_desktop() {
            FilterPresentation::Popover
        } else {
            FilterPresentation::Sidebar
        }
    }
}
