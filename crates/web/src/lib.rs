// =============================================================================
// Stock Tracker Web - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// 3. Mounting
// 4. WASM Entry Point
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod app;
pub mod components;
pub mod error;
pub mod state;
pub mod theme;
pub mod utils;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use app::App;
pub use error::MountError;
pub use state::{FormState, LockIcon};
pub use theme::{Styles, Theme};

// -----------------------------------------------------------------------------
// 3. Mounting
// -----------------------------------------------------------------------------

/// Id of the element the app renders into (see `index.html`).
pub const ROOT_ELEMENT_ID: &str = "root";

/// Log level for the browser console.
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Mount [`App`] into `#root` for the lifetime of the page.
pub fn mount_to_root() -> Result<(), MountError> {
    let root = utils::root_element(ROOT_ELEMENT_ID)?;
    leptos::mount::mount_to(root, App).forget();
    log::info!("Mounted Stock Tracker into #{}", ROOT_ELEMENT_ID);
    Ok(())
}

// -----------------------------------------------------------------------------
// 4. WASM Entry Point (for library usage)
// -----------------------------------------------------------------------------

use wasm_bindgen::prelude::*;

/// Mount the Leptos app to the DOM (for external callers).
#[wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log_level());
    if let Err(e) = mount_to_root() {
        log::error!("Failed to mount Stock Tracker: {}", e);
    }
}
