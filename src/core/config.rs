// ---------------------------------------------------------------------------
// AppConfig — file-based config loader (dealscout.json) with env-var fallback
// ---------------------------------------------------------------------------

/// Default public Gemini REST endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for the grounded analysis call.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Gemini sub-config (mirrors the `gemini` key in dealscout.json).
#[derive(serde::Deserialize, Default, Clone, Debug)]
pub struct GeminiConfig {
    /// API key. Never logged.
    pub api_key: Option<String>,
    /// REST base — e.g. `https://generativelanguage.googleapis.com/v1beta`.
    pub base_url: Option<String>,
    /// Model name — e.g. `gemini-3-pro-preview`.
    pub model: Option<String>,
}

impl GeminiConfig {
    /// API key: JSON field → `GEMINI_API_KEY` env var → `None`.
    ///
    /// Unlike key-less local LLM endpoints, this provider always requires a
    /// key, so a blank field falls through to the env var.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(k) = &self.api_key {
            let k = k.trim();
            if !k.is_empty() {
                return Some(k.to_string());
            }
        }
        std::env::var("GEMINI_API_KEY")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Base URL: JSON field → `GEMINI_BASE_URL` env var → the public endpoint.
    pub fn resolve_base_url(&self) -> String {
        if let Some(u) = &self.base_url {
            if !u.trim().is_empty() {
                return u.clone();
            }
        }
        std::env::var("GEMINI_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Model name: JSON field → `DEALSCOUT_MODEL` env var → the default model.
    pub fn resolve_model(&self) -> String {
        if let Some(m) = &self.model {
            if !m.trim().is_empty() {
                return m.clone();
            }
        }
        std::env::var("DEALSCOUT_MODEL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }
}

/// Top-level config loaded from `dealscout.json`.
#[derive(serde::Deserialize, Default, Clone, Debug)]
pub struct AppConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
}

/// Load `dealscout.json` from standard locations.
///
/// Search order (first found wins):
/// 1. `DEALSCOUT_CONFIG` env var path
/// 2. `./dealscout.json`  (process cwd)
/// 3. `../dealscout.json` (one level up — repo root when running from a subdir)
///
/// Missing file → `AppConfig::default()` (silent, all env-var fallbacks apply).
/// Parse error → log a warning, return `AppConfig::default()`.
pub fn load_config() -> AppConfig {
    let candidates: Vec<std::path::PathBuf> = {
        let mut v = vec![
            std::path::PathBuf::from("dealscout.json"),
            std::path::PathBuf::from("../dealscout.json"),
        ];
        if let Ok(env_path) = std::env::var("DEALSCOUT_CONFIG") {
            v.insert(0, std::path::PathBuf::from(env_path));
        }
        v
    };

    for path in &candidates {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<AppConfig>(&contents) {
                Ok(cfg) => {
                    tracing::info!("dealscout.json loaded from {}", path.display());
                    return cfg;
                }
                Err(e) => {
                    tracing::warn!(
                        "dealscout.json parse error at {}: {} — using defaults",
                        path.display(),
                        e
                    );
                    return AppConfig::default();
                }
            },
            Err(_) => continue, // file not found at this path — try next
        }
    }

    // No config file found anywhere — silently use defaults (env-var fallbacks apply).
    AppConfig::default()
}
