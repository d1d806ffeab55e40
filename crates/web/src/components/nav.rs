// =============================================================================
// Stock Tracker Web - Navigation Bar
// =============================================================================
// Fixed top app bar with the logo and application title
// =============================================================================

use leptos::prelude::*;

use crate::theme::{Styles, Theme};

/// Title shown in the navigation bar and the document head.
pub const APP_TITLE: &str = "Stock Tracker";

/// Logo asset served by Trunk from `assets/`.
pub const LOGO_SRC: &str = "/assets/logo.svg";

/// Top navigation bar. Stateless.
#[component]
pub fn NavBar() -> impl IntoView {
    let theme = use_context::<Theme>().unwrap_or_default();
    let styles = Styles::from_theme(&theme);

    view! {
        <header class="app-bar app-bar-fixed">
            <div class="toolbar">
                <img src=LOGO_SRC alt="logo" class="nav-logo" style=styles.logo />
                <h6 class="nav-title">{APP_TITLE}</h6>
            </div>
        </header>
    }
}
