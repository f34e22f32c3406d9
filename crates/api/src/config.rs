//! Server configuration sourced from the environment.

/// Runtime settings for the HTTP server.
///
/// Each field falls back to a local-development default when its
/// variable is unset:
///
/// | Variable | Default |
/// |---|---|
/// | `HOST` | `0.0.0.0` |
/// | `PORT` | `3000` |
/// | `CORS_ORIGINS` | `http://localhost:5173` |
/// | `REQUEST_TIMEOUT_SECS` | `30` |
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins, comma-separated in the environment.
    pub cors_origins: Vec<String>,
    /// Per-request timeout enforced by the middleware stack.
    pub request_timeout_secs: u64,
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

impl ServerConfig {
    /// Read the configuration from the environment.
    ///
    /// Panics on an unparseable `PORT` or `REQUEST_TIMEOUT_SECS`;
    /// misconfiguration surfaces at startup, not at request time.
    pub fn from_env() -> Self {
        let port: u16 = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}
