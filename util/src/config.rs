//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.
//!
//! Most callers use the free accessor functions at the bottom of this module
//! (`config::host()`, `config::score_scale()`, ...) rather than the struct itself.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub host: String,
    pub port: u16,
    pub ignore_words_path: String,
    pub score_scale: f64,
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub generation_model: String,
    pub generation_max_tokens: u32,
    pub embedding_model: String,
    pub request_timeout_secs: u64,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

/// Reads `key` and parses it, falling back to `default` when unset or malformed.
fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Every value has a default, so this never panics. Numeric values that
    /// fail to parse fall back to their default.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: env::var("APP_ENV").unwrap_or_else(|_| "development".into()),
            project_name: env::var("PROJECT_NAME").unwrap_or_else(|_| "answer-grader".into()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "api=info,marker=info".into()),
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "api.log".into()),
            log_to_stdout: env::var("LOG_TO_STDOUT").unwrap_or_else(|_| "false".into()) == "true",
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: parse_or("PORT", 3000),
            ignore_words_path: env::var("IGNORE_WORDS_PATH")
                .unwrap_or_else(|_| "static/ignore_words.txt".into()),
            score_scale: parse_or("SCORE_SCALE", 5.0),
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_base_url: env::var("GEMINI_BASE_URL").unwrap_or_else(|_| {
                "https://generativelanguage.googleapis.com/v1beta".into()
            }),
            generation_model: env::var("GENERATION_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".into()),
            generation_max_tokens: parse_or("GENERATION_MAX_TOKENS", 100),
            embedding_model: env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| "text-embedding-004".into()),
            request_timeout_secs: parse_or("REQUEST_TIMEOUT_SECS", 30),
        }
    }

    /// Returns a shared reference to the global configuration.
    ///
    /// # Panics
    /// Panics if the lock cannot be acquired.
    pub fn global() -> std::sync::RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .expect("Failed to acquire AppConfig read lock")
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock
                .write()
                .expect("Failed to acquire AppConfig write lock");
            *guard = AppConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    ///
    /// Used by public per-field setter methods.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock
            .write()
            .expect("Failed to acquire AppConfig write lock");
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_ignore_words_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.ignore_words_path = value.into());
    }

    pub fn set_score_scale(value: f64) {
        AppConfig::set_field(|cfg| cfg.score_scale = value);
    }

    pub fn set_gemini_base_url(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.gemini_base_url = value.into());
    }
}

// --- Free accessors ---

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn ignore_words_path() -> String {
    AppConfig::global().ignore_words_path.clone()
}

pub fn score_scale() -> f64 {
    AppConfig::global().score_scale
}

pub fn gemini_api_key() -> String {
    AppConfig::global().gemini_api_key.clone()
}

pub fn gemini_base_url() -> String {
    AppConfig::global().gemini_base_url.clone()
}

pub fn generation_model() -> String {
    AppConfig::global().generation_model.clone()
}

pub fn generation_max_tokens() -> u32 {
    AppConfig::global().generation_max_tokens
}

pub fn embedding_model() -> String {
    AppConfig::global().embedding_model.clone()
}

pub fn request_timeout_secs() -> u64 {
    AppConfig::global().request_timeout_secs
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn defaults_apply_when_env_is_unset() {
        unsafe {
            env::remove_var("SCORE_SCALE");
            env::remove_var("GENERATION_MAX_TOKENS");
        }
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.score_scale, 5.0);
        assert_eq!(cfg.generation_max_tokens, 100);
    }

    #[test]
    #[serial]
    fn malformed_numbers_fall_back_to_default() {
        unsafe {
            env::set_var("PORT", "not-a-port");
            env::set_var("SCORE_SCALE", "ten");
        }
        let cfg = AppConfig::from_env();
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.score_scale, 5.0);
        unsafe {
            env::remove_var("PORT");
            env::remove_var("SCORE_SCALE");
        }
    }

    #[test]
    #[serial]
    fn setters_override_and_reset_restores() {
        AppConfig::set_score_scale(10.0);
        AppConfig::set_gemini_base_url("http://localhost:9999");
        assert_eq!(score_scale(), 10.0);
        assert_eq!(gemini_base_url(), "http://localhost:9999");

        unsafe {
            env::remove_var("SCORE_SCALE");
            env::remove_var("GEMINI_BASE_URL");
        }
        AppConfig::reset();
        assert_eq!(score_scale(), 5.0);
        assert!(gemini_base_url().starts_with("https://generativelanguage"));
    }
}
