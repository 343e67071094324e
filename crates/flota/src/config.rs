use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection URL (default: "postgres://localhost:5432/flota")
    /// Note: Only used when the `postgres` feature is enabled.
    #[allow(dead_code)]
    pub database_url: String,
    /// Maximum connections in the PostgreSQL pool (default: 10)
    #[allow(dead_code)]
    pub pg_max_connections: u32,
    /// Directory served for unmatched paths (default: "public")
    pub public_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DATABASE_URL` - PostgreSQL connection URL (default: "postgres://localhost:5432/flota")
    /// - `PG_MAX_CONNECTIONS` - Maximum pool connections (default: 10)
    /// - `PUBLIC_DIR` - Static files directory (default: "public")
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/flota".to_string()),
            pg_max_connections: env::var("PG_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            public_dir: env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = Config {
            database_url: "postgres://localhost:5432/flota".to_string(),
            pg_max_connections: 10,
            public_dir: "public".to_string(),
        };

        assert_eq!(config.pg_max_connections, 10);
        assert_eq!(config.public_dir, "public");
    }
}
