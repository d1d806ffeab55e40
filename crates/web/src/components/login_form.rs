// =============================================================================
// Stock Tracker Web - Login Form
// =============================================================================
// Table of Contents:
// 1. Lock Icon View
// 2. Login Form
// =============================================================================

use leptos::prelude::*;

use super::common::{Button, Grid, GridItem};
use super::forms::TextInput;
use crate::state::{FormState, LockIcon};

// -----------------------------------------------------------------------------
// 1. Lock Icon View
// -----------------------------------------------------------------------------

/// SVG rendering of a [`LockIcon`].
#[component]
pub fn LockIconView(#[prop(into)] icon: Signal<LockIcon>) -> impl IntoView {
    view! {
        <svg
            class="lock-icon"
            viewBox="0 0 24 24"
            role="img"
            data-icon=move || icon.get().name()
            aria-label=move || icon.get().label()
        >
            <path d=move || icon.get().svg_path()></path>
        </svg>
    }
}

// -----------------------------------------------------------------------------
// 2. Login Form
// -----------------------------------------------------------------------------

/// Login card body: lock icon, email and password fields, login button.
///
/// The button only flips the local [`FormState`]; the inputs are never read.
#[component]
pub fn LoginForm() -> impl IntoView {
    let form = RwSignal::new(FormState::new());
    let icon = Signal::derive(move || form.get().icon());

    let toggle_login = Callback::new(move |()| {
        form.update(|state| state.toggle());
        log::debug!(
            "Login toggled (is_logged_in = {})",
            form.get_untracked().is_logged_in()
        );
    });

    view! {
        <div class="login-form">
            <Grid spacing=2>
                <GridItem xs=12>
                    <LockIconView icon=icon />
                </GridItem>

                <GridItem xs=2 />
                <GridItem xs=8>
                    <TextInput
                        id="standard-basic"
                        label="Email Address"
                        required=true
                        full_width=true
                    />
                </GridItem>
                <GridItem xs=2 />

                <GridItem xs=2 />
                <GridItem xs=8>
                    <TextInput
                        id="standard-password-input"
                        label="Password"
                        input_type="password"
                        required=true
                        full_width=true
                    />
                </GridItem>
                <GridItem xs=2 />

                <GridItem xs=12>
                    <Button label="Login" on_click=toggle_login />
                </GridItem>
            </Grid>
        </div>
    }
}
