#[derive(Debug, Clone)]
pub struct ScraperSettings {
    pub rate_limit_ms: u64,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub base_url: &'static str,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            rate_limit_ms: 1000,
            // The ranking site serves an empty table to unknown agents
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
            timeout_secs: 30,
            base_url: "https://playerzone.roundnetgermany.de",
        }
    }
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    pub cache_dir: String,
    pub snapshot_key: &'static str,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            cache_dir: std::env::var("RGX_CACHE_DIR").unwrap_or_else(|_| "cache".to_string()),
            snapshot_key: "players",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scraper: ScraperSettings,
    pub storage: StorageSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scraper: ScraperSettings::default(),
            storage: StorageSettings::default(),
        }
    }

    /// Same settings, reading and writing snapshots under `cache_dir`
    pub fn with_cache_dir(mut self, cache_dir: impl Into<String>) -> Self {
        self.storage.cache_dir = cache_dir.into();
        self
    }
}
