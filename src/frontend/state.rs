use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use crate::frontend::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env());
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("build http client")?;
        Ok(Self { http, config })
    }

    #[cfg(test)]
    pub(crate) fn with_backend_host(backend_host: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            config: Arc::new(AppConfig {
                backend_host: backend_host.into(),
            }),
        }
    }
}
