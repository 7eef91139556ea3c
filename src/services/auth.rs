use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher,
};
use uuid::Uuid;

use crate::db::{self, Db};
use crate::models::{SignupFields, User};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Email already used")]
    EmailExists,
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Other(String),
}

pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::Other(e.to_string()))
}

/// Creates the account described by a signup form.
///
/// The form's own rules are applied again here since the browser side can be
/// bypassed.
pub async fn register(db: &Db, fields: &SignupFields) -> Result<User, AuthError> {
    if let Some((field, error)) = fields.first_error() {
        return Err(AuthError::InvalidInput(field.error_message(error).into()));
    }
    let existing = db::get_user_by_email(db, &fields.email)
        .await
        .map_err(|e| AuthError::Other(e.to_string()))?;
    if existing.is_some() {
        return Err(AuthError::EmailExists);
    }

    let id = Uuid::new_v4().to_string();
    let hash = hash_password(&fields.password)?;
    db::create_user(db, &id, &fields.display_name, &fields.email, &hash)
        .await
        .map_err(|e| match e {
            // Lost a race with a concurrent signup for the same address
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AuthError::EmailExists
            }
            e => AuthError::Other(e.to_string()),
        })?;

    tracing::info!(user_id = %id, "user registered");
    Ok(User {
        id,
        display_name: fields.display_name.clone(),
        email: fields.email.to_lowercase(),
    })
}

#[cfg(test)]
mod tests {
    use argon2::{PasswordHash, PasswordVerifier};
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;

    async fn memory_db() -> Db {
        // A single connection keeps every query on the same in-memory database
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        db::run_migrations(&db).await.unwrap();
        db
    }

    fn fields(email: &str) -> SignupFields {
        SignupFields {
            display_name: "johndoe".into(),
            email: email.into(),
            password: "Aa1111111112".into(),
        }
    }

    #[test]
    fn test_hash_password() {
        let hash = hash_password("Aa1111111112").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();

        assert!(Argon2::default()
            .verify_password(b"Aa1111111112", &parsed)
            .is_ok());
        assert!(Argon2::default().verify_password(b"other", &parsed).is_err());
    }

    #[tokio::test]
    async fn test_register_creates_user() {
        let db = memory_db().await;

        let user = register(&db, &fields("JohnDoe@Mail.com")).await.unwrap();

        assert_eq!(user.display_name, "johndoe");
        assert_eq!(user.email, "johndoe@mail.com");
        let row = db::get_user_by_email(&db, "johndoe@mail.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.id, user.id);
        assert_ne!(row.password_hash, "Aa1111111112");
    }

    #[tokio::test]
    async fn test_register_rejects_used_email() {
        let db = memory_db().await;
        register(&db, &fields("johndoe@mail.com")).await.unwrap();

        let err = register(&db, &fields("johndoe@mail.com")).await.unwrap_err();

        assert!(matches!(err, AuthError::EmailExists));
        assert_eq!(err.to_string(), "Email already used");
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_fields() {
        let db = memory_db().await;
        let mut weak = fields("johndoe@mail.com");
        weak.password = "0000000000A a".into();

        let err = register(&db, &weak).await.unwrap_err();

        assert!(matches!(err, AuthError::InvalidInput(_)));
        assert!(db::get_user_by_email(&db, "johndoe@mail.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_register_surfaces_database_errors() {
        let db = memory_db().await;
        sqlx::query("DROP TABLE users").execute(&db).await.unwrap();

        let err = register(&db, &fields("johndoe@mail.com")).await.unwrap_err();

        assert!(matches!(err, AuthError::Other(_)), "{err:?}");
    }
}
