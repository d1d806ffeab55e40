// =============================================================================
// Stock Tracker Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

use crate::components::{Card, LoginForm, NavBar, APP_TITLE};
use crate::theme::{Styles, Theme};

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root component: navigation bar above a centered login card.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = Theme::default();
    let styles = Styles::from_theme(&theme);
    provide_context(theme);

    view! {
        <Title text=APP_TITLE />
        <div class="App">
            <NavBar />
            <div class="app-root" style=styles.root>
                <Card class="login-card">
                    <LoginForm />
                </Card>
            </div>
        </div>
    }
}
