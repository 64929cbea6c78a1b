use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub http_client: reqwest::Client,
    /// File-based config loaded from `dealscout.json` (env-var fallback for
    /// all fields).
    pub config: Arc<crate::core::config::AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field(
                "api_key_configured",
                &self.config.gemini.resolve_api_key().is_some(),
            )
            .finish()
    }
}

impl AppState {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            config: Arc::new(crate::core::config::load_config()),
        }
    }

    /// Replace the loaded config. Lets tests point the pipeline at a stub
    /// endpoint instead of the public one.
    pub fn with_config(mut self, config: crate::core::config::AppConfig) -> Self {
        self.config = Arc::new(config);
        self
    }
}
