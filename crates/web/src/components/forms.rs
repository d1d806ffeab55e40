// =============================================================================
// Stock Tracker Web - Form Components
// =============================================================================

use leptos::prelude::*;

/// Labelled text input.
///
/// The field is presentational: its value is never bound, read or submitted.
#[component]
pub fn TextInput(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional)] required: bool,
    #[prop(optional)] full_width: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };
    let label_for = id.clone();

    view! {
        <div class="form-field" class:full-width=full_width>
            <label class="form-label" for=label_for>
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            <input
                id=id
                type=input_type
                class="form-input"
                required=required
            />
        </div>
    }
}
