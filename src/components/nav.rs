use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos::web_sys;
use leptos_router::components::A;

use crate::context::use_connected_user;
use crate::server_fns::{get_current_user, Logout};

#[component]
pub fn Nav() -> impl IntoView {
    let connected_user = use_connected_user();
    let session_user = Resource::new(|| (), |_| get_current_user());
    let logout_action = ServerAction::<Logout>::new();

    // Restore the connected user from the session after a reload
    Effect::new(move |_| {
        if let Some(Ok(Some(user))) = session_user.get() {
            if connected_user.get().is_none() {
                connected_user.set(Some(user));
            }
        }
    });

    // Full navigation so the cleared session is picked up everywhere
    Effect::new(move |_| {
        if let Some(Ok(_)) = logout_action.value().get() {
            connected_user.set(None);
            #[cfg(feature = "hydrate")]
            {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/signup");
                }
            }
        }
    });

    view! {
        <nav class="main-nav">
            <div class="nav-brand">
                <A href="/">"Accueil"</A>
            </div>

            <div class="nav-links">
                <Suspense fallback=|| ()>
                    {move || {
                        session_user.get().map(|_| match connected_user.get() {
                            Some(user) => view! {
                                <A href="/feed">"Fil"</A>
                                <span class="user-name">{user.display_name}</span>
                                <ActionForm action=logout_action attr:class="logout-form">
                                    <button type="submit" class="btn btn-small">"Se déconnecter"</button>
                                </ActionForm>
                            }.into_any(),
                            None => view! {
                                <A href="/signup">"Créer un compte"</A>
                            }.into_any(),
                        })
                    }}
                </Suspense>
            </div>
        </nav>
    }
}
