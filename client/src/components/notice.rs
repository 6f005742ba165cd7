//! Banner for page-level success and error notices.

use leptos::prelude::*;

use crate::state::notice::NoticeKind;

/// Notice banner. `global` notices span the page; `multi_line` ones wrap
/// instead of truncating.
#[component]
pub fn Notice(
    kind: NoticeKind,
    #[prop(optional)] global: bool,
    #[prop(optional)] multi_line: bool,
    children: Children,
) -> impl IntoView {
    let class = format!("notice notice--{}", kind.as_str());

    view! {
        <div
            class=class
            class:notice--global=global
            class:notice--multi-line=multi_line
            role="alert"
        >
            {children()}
        </div>
    }
}
