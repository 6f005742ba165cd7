//! Vertical-rhythm wrapper for labeled input rows.

use leptos::prelude::*;

/// Wraps `children` in a container with the form's row spacing.
#[component]
pub fn InputGroup(children: Children) -> impl IntoView {
    view! { <div class="input-group">{children()}</div> }
}
