use std::str::FromStr;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, Pool, Sqlite};

pub type Db = Pool<Sqlite>;

// User row, including the credentials that never leave the server
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: String,
}

// Create connection pool, creating the database file on first start
pub async fn create_pool(url: &str) -> Result<Db, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(20)
        .connect_with(options)
        .await
}

// Run migrations (create tables if not exist)
pub async fn run_migrations(db: &Db) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            display_name TEXT NOT NULL,
            email TEXT UNIQUE NOT NULL,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(db)
    .await?;
    Ok(())
}

// User queries
pub async fn get_user_by_email(db: &Db, email: &str) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE email = ?")
        .bind(email.to_lowercase())
        .fetch_optional(db)
        .await
}

pub async fn create_user(
    db: &Db,
    id: &str,
    display_name: &str,
    email: &str,
    password_hash: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (id, display_name, email, password_hash, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(display_name)
    .bind(email.to_lowercase())
    .bind(password_hash)
    .bind(Utc::now().to_rfc3339())
    .execute(db)
    .await?;
    Ok(())
}
