use leptos::prelude::*;

use super::icons::{CheckIcon, XIcon};

/// Label with a green check or grey cross depending on `fulfilled`
#[component]
pub fn RequirementBadge(label: &'static str, #[prop(into)] fulfilled: Signal<bool>) -> impl IntoView {
    view! {
        <li class=move || {
            if fulfilled.get() { "requirement-badge fulfilled" } else { "requirement-badge unfulfilled" }
        }>
            {move || {
                if fulfilled.get() {
                    view! { <CheckIcon class="badge-icon"/> }.into_any()
                } else {
                    view! { <XIcon class="badge-icon"/> }.into_any()
                }
            }}
            {label}
        </li>
    }
}
