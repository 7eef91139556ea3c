use leptos::prelude::*;

use crate::components::AuthGuard;
use crate::context::use_connected_user;

#[component]
pub fn FeedPage() -> impl IntoView {
    let connected_user = use_connected_user();

    view! {
        <AuthGuard>
            <div class="feed-page">
                <h1>
                    "Bienvenue "
                    {move || connected_user.get().map(|u| u.display_name).unwrap_or_default()}
                    " !"
                </h1>
            </div>
        </AuthGuard>
    }
}
