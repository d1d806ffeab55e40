// =============================================================================
// Stock Tracker Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Navigation
// 2. Common Components
// 3. Form Components
// 4. Login Form
// =============================================================================

pub mod nav;
pub mod common;
pub mod forms;
pub mod login_form;

pub use nav::{NavBar, APP_TITLE, LOGO_SRC};
pub use common::{Button, Card, Grid, GridItem};
pub use forms::TextInput;
pub use login_form::{LockIconView, LoginForm};
