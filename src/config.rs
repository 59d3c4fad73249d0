use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL: &str = "http://localhost:3002";
const DEFAULT_SESSION_STORAGE_KEY: &str = "fablab_login_state";
const DEFAULT_NOTICES_PER_PAGE: usize = 10;
const DEFAULT_LANGUAGE: &str = "KO";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    pub session_storage_key: String,
    pub notices_per_page: usize,
    pub default_language: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            session_storage_key: DEFAULT_SESSION_STORAGE_KEY.to_string(),
            notices_per_page: DEFAULT_NOTICES_PER_PAGE,
            default_language: DEFAULT_LANGUAGE.to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("SESSION_STORAGE_KEY"),
            option_env!("NOTICES_PER_PAGE"),
            option_env!("DEFAULT_LANGUAGE"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    fn from_values(
        backend_url: Option<&str>,
        session_storage_key: Option<&str>,
        notices_per_page: Option<&str>,
        default_language: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();

        // Una página de 0 avisos no tiene sentido: se vuelve al valor por defecto
        let notices_per_page = notices_per_page
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.notices_per_page);

        Self {
            backend_url: backend_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            session_storage_key: session_storage_key
                .map(str::to_string)
                .unwrap_or(defaults.session_storage_key),
            notices_per_page,
            default_language: default_language
                .map(str::to_uppercase)
                .unwrap_or(defaults.default_language),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_missing() {
        let config = AppConfig::from_values(None, None, None, None, None);
        assert_eq!(config.backend_url, "http://localhost:3002");
        assert_eq!(config.notices_per_page, 10);
        assert_eq!(config.default_language, "KO");
        assert!(config.enable_logging);
    }

    #[test]
    fn test_invalid_page_size_falls_back() {
        let config = AppConfig::from_values(None, None, Some("0"), None, None);
        assert_eq!(config.notices_per_page, 10);

        let config = AppConfig::from_values(None, None, Some("abc"), None, None);
        assert_eq!(config.notices_per_page, 10);

        let config = AppConfig::from_values(None, None, Some("25"), None, None);
        assert_eq!(config.notices_per_page, 25);
    }

    #[test]
    fn test_values_are_normalized() {
        let config = AppConfig::from_values(Some("https://api.example.com/"), None, None, Some("en"), Some("false"));
        assert_eq!(config.backend_url, "https://api.example.com");
        assert_eq!(config.default_language, "EN");
        assert_eq!(config.log_level(), log::Level::Warn);
    }
}
