// =============================================================================
// Stock Tracker Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Button
// 2. Card
// 3. Grid
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Button
// -----------------------------------------------------------------------------

/// Contained primary button.
#[component]
pub fn Button(
    #[prop(into)] label: String,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="btn btn-contained btn-primary"
            on:click=move |_| on_click.run(())
        >
            {label}
        </button>
    }
}

// -----------------------------------------------------------------------------
// 2. Card
// -----------------------------------------------------------------------------

/// Card container with a content region and an (empty) actions row.
#[component]
pub fn Card(
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("card {}", class)>
            <div class="card-content">
                {children()}
            </div>
            <div class="card-actions"></div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Grid
// -----------------------------------------------------------------------------

/// 12-column grid container.
#[component]
pub fn Grid(
    #[prop(optional)] spacing: u8,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("grid grid-spacing-{}", spacing)>
            {children()}
        </div>
    }
}

/// Grid cell spanning `xs` of 12 columns. Without children it acts as a spacer.
#[component]
pub fn GridItem(
    xs: u8,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class=format!("grid-item grid-xs-{}", xs.clamp(1, 12))>
            {children.map(|children| children())}
        </div>
    }
}
