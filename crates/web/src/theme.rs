// =============================================================================
// Stock Tracker Web - Theme & Layout Styles
// =============================================================================
// Table of Contents:
// 1. Theme
// 2. Styles
// 3. Tests
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Theme
// -----------------------------------------------------------------------------

/// Default spacing unit in pixels.
pub const DEFAULT_SPACING_UNIT: u32 = 8;

/// Presentation settings provided to the component tree via Leptos context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Pixels per spacing step.
    pub spacing_unit: u32,
}

impl Theme {
    /// Convert spacing factors into a CSS length list.
    ///
    /// `spacing(&[25, 2])` with the default unit yields `"200px 16px"`.
    pub fn spacing(&self, factors: &[u32]) -> String {
        factors
            .iter()
            .map(|factor| format!("{}px", factor * self.spacing_unit))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self { spacing_unit: DEFAULT_SPACING_UNIT }
    }
}

// -----------------------------------------------------------------------------
// 2. Styles
// -----------------------------------------------------------------------------

/// Inline styles derived from a [`Theme`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Styles {
    /// Centered box holding the login card.
    pub root: String,
    /// Logo image in the navigation bar.
    pub logo: String,
}

impl Styles {
    pub fn from_theme(theme: &Theme) -> Self {
        let root = format!(
            "padding: {}; height: 400px; display: flex; flex-direction: column; \
             justify-content: center; align-items: center;",
            theme.spacing(&[25, 2]),
        );
        let logo = format!("max-width: 2%; margin-right: {};", theme.spacing(&[2]));

        Self { root, logo }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

// -----------------------------------------------------------------------------
// 3. Tests
// -----------------------------------------------------------------------------
