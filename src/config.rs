use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default number of entries per result page when the caller sends no limit
/// or an unusable one.
pub const DEFAULT_PAGE_LIMIT: usize = 20;

/// Minimum query length, counted in Unicode scalar values (`str::chars`).
/// A single two-byte character such as `"ψ"` is still one character and is
/// rejected.
pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON file holding the lexicon entries loaded at startup
    pub lexicon_path: PathBuf,
    /// Server bind address
    pub bind_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon_path: PathBuf::from("./data/lexicon.json"),
            bind_addr: "127.0.0.1:9000".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("LEXICON_DATA_PATH") {
            config.lexicon_path = PathBuf::from(path);
        }
        if let Ok(addr) = std::env::var("LEXICON_BIND_ADDR") {
            config.bind_addr = addr;
        }

        config
    }
}
