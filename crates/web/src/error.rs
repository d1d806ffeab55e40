// =============================================================================
// Stock Tracker Web - Error Types
// =============================================================================

use thiserror::Error;

/// Failure to locate the DOM node the app mounts into.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    #[error("No window object available")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("Root element #{0} not found")]
    MissingRoot(String),

    #[error("Element #{0} is not an HTML element")]
    NotHtmlElement(String),
}
