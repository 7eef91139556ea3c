use leptos::prelude::*;

use crate::models::User;

#[server]
pub async fn get_current_user() -> Result<Option<User>, ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;
    use tower_sessions::Session;

    let Extension(session) = extract::<Extension<Session>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(session.get("user").await.ok().flatten())
}

#[server]
pub async fn create_user(
    email: String,
    display_name: String,
    password: String,
) -> Result<User, ServerFnError> {
    use axum::Extension;
    use crate::{models::SignupFields, services::auth, state::AppState};
    use leptos_axum::extract;
    use tower_sessions::Session;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let Extension(session) = extract::<Extension<Session>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let fields = SignupFields {
        display_name,
        email,
        password,
    };
    let user = auth::register(&state.db, &fields)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    session.insert("user", &user).await?;
    Ok(user)
}

#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    use axum::Extension;
    use leptos_axum::extract;
    use tower_sessions::Session;

    let Extension(session) = extract::<Extension<Session>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    session.delete().await?;
    Ok(())
}
