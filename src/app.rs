use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::Nav;
use crate::context::provide_connected_user;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_connected_user();

    view! {
        <Stylesheet id="leptos" href="/pkg/signup.css"/>
        <Title text="Créer un compte"/>
        <Meta name="description" content="Inscription"/>

        <Router>
            <Nav/>
            <main>
                <Routes fallback=|| view! { <h1>"404 - Page introuvable"</h1> }>
                    <Route path=path!("/") view=SignupPage/>
                    <Route path=path!("/signup") view=SignupPage/>
                    <Route path=path!("/feed") view=FeedPage/>
                </Routes>
            </main>
        </Router>
    }
}
