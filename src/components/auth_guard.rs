use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::context::use_connected_user;
use crate::server_fns::get_current_user;

/// Renders `children` only for a connected user, otherwise sends the visitor to signup
#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let connected_user = use_connected_user();
    let session_user = Resource::new(|| (), |_| get_current_user());
    let navigate = use_navigate();

    Effect::new(move |_| {
        if connected_user.get().is_some() {
            return;
        }
        match session_user.get() {
            Some(Ok(Some(user))) => connected_user.set(Some(user)),
            Some(Ok(None)) => navigate("/signup", Default::default()),
            _ => {}
        }
    });

    view! {
        <Suspense fallback=|| view! { <div class="loading">"Chargement..."</div> }>
            {move || {
                if connected_user.get().is_some() {
                    return Some(children().into_any());
                }
                session_user.get().map(|result| {
                    match result {
                        Ok(Some(_)) => children().into_any(),
                        _ => view! { <div class="loading">"Redirection..."</div> }.into_any(),
                    }
                })
            }}
        </Suspense>
    }
}
