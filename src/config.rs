use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite:signup.db";

/// Server settings read from the environment (and `.env`, if present)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    /// Serve session cookies with `Secure`
    pub production: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            production: var("PRODUCTION").is_some(),
        }
    }
}
