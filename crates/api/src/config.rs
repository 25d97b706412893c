use crate::auth::password::hash_password;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Maximum pooled database connections (default: `10`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory served under `/static` (default: `static`).
    pub static_dir: String,
    /// The single administrator credential guarding management endpoints.
    pub admin: AdminConfig,
}

/// Admin username plus the Argon2id hash of its password.
///
/// The plaintext password is hashed once at startup and then dropped.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: String,
    pub password_hash: String,
}

impl AdminConfig {
    /// | Env Var          | Default        |
    /// |------------------|----------------|
    /// | `ADMIN_USERNAME` | `admin`        |
    /// | `ADMIN_PASSWORD` | `dev-password` |
    pub fn from_env() -> Self {
        let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into());

        let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
            tracing::warn!("ADMIN_PASSWORD not set, using the development default");
            "dev-password".into()
        });

        let password_hash = hash_password(&password).expect("Failed to hash admin password");

        Self {
            username,
            password_hash,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `DB_MAX_CONNECTIONS`   | `10`                       |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STATIC_DIR`           | `static`                   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());

        let admin = AdminConfig::from_env();

        Self {
            host,
            port,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            static_dir,
            admin,
        }
    }
}
