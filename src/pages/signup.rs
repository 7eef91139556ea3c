use leptos::prelude::*;

use crate::components::SignupForm;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Créer un compte"</h1>
                <SignupForm/>
            </div>
        </div>
    }
}
