use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Hostname of the backend service, without scheme or port. Matches the
    /// service name used in container deployments.
    pub backend_host: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let backend_host =
            std::env::var("BACKEND_HOST").unwrap_or_else(|_| "backend-api".into());
        Self { backend_host }
    }
}
