//! Shared action button.

use leptos::prelude::*;

#[component]
pub fn Button(#[prop(into)] text: String, on_click: Callback<()>, disabled: Signal<bool>) -> impl IntoView {
    view! {
        <button
            class="button"
            class:button--disabled=move || disabled.get()
            type="button"
            disabled=move || disabled.get()
            on:click=move |_| on_click.run(())
        >
            {text}
        </button>
    }
}
