//! Конфигурация приложения
//!
//! Значения по умолчанию встроены в бандл в виде TOML. Для отладки их можно
//! переопределить, положив TOML той же формы в localStorage под ключом
//! [`OVERRIDE_STORAGE_KEY`]; частичный документ дополняется значениями по умолчанию.

use serde::Deserialize;
use std::sync::OnceLock;

pub const OVERRIDE_STORAGE_KEY: &str = "admin_console_config";

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[list]
page_size = 10
page_size_options = [10, 25, 50, 100]
min_loading_ms = 2000
search_debounce_ms = 500
notice_ttl_ms = 4000
"#;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ListConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub min_loading_ms: u32,
    pub search_debounce_ms: u32,
    pub notice_ttl_ms: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            page_size_options: vec![10, 25, 50, 100],
            min_loading_ms: 2000,
            search_debounce_ms: 500,
            notice_ttl_ms: 4000,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            list: ListConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }
}

/// Load configuration
///
/// Order:
/// 1. Override from localStorage (if present and valid)
/// 2. Embedded default config
pub fn load_config() -> AppConfig {
    if let Some(raw) = read_override() {
        match AppConfig::parse(&raw) {
            Ok(config) => {
                log::info!("Using config override from localStorage");
                return config;
            }
            Err(e) => log::warn!("Ignoring invalid config override: {}", e),
        }
    }

    AppConfig::parse(DEFAULT_CONFIG).unwrap_or_else(|e| {
        log::error!("Embedded config is invalid: {}", e);
        AppConfig::default()
    })
}

/// Конфигурация, загруженная один раз за время жизни страницы
pub fn current() -> &'static AppConfig {
    static CONFIG: OnceLock<AppConfig> = OnceLock::new();
    CONFIG.get_or_init(load_config)
}

fn read_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(OVERRIDE_STORAGE_KEY)
        .ok()?
}
