use leptos::prelude::*;

use super::icons::XCircleIcon;

#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|message| {
            view! {
                <div class="error-banner" role="alert">
                    <XCircleIcon class="error-banner-icon"/>
                    <h3>{message}</h3>
                </div>
            }
        })
    }
}
