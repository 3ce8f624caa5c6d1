use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_CACHE_TTL_SECONDS: i64 = 300;
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 4096;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub bind_addr: String,
    /// Lifetime of a memoized response. Zero disables the cache.
    pub cache_ttl_seconds: i64,
    pub cache_max_entries: usize,
    pub log_level: String,
}

impl Config {
    pub fn init() -> Self {
        Config {
            data_dir: std::env::var("F1_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            cache_ttl_seconds: std::env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|ttl| ttl.parse::<i64>().ok())
                .filter(|ttl| *ttl >= 0)
                .unwrap_or(DEFAULT_CACHE_TTL_SECONDS),
            cache_max_entries: std::env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|max| max.parse::<usize>().ok())
                .unwrap_or(DEFAULT_CACHE_MAX_ENTRIES),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string())
                .to_lowercase(),
        }
    }

    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Config {
            data_dir: data_dir.into(),
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECONDS,
            cache_max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            log_level: "info".to_string(),
        }
    }
}
