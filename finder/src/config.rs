use std::fmt::{self, Display, Formatter};
use std::time::Duration;

const DEFAULT_PAGE_DELAY_MS: u64 = 500;
const DEFAULT_COUNT: i64 = 30;
const DEFAULT_HISTORY_PATH: &str = "history.json";
const DEFAULT_HISTORY_LIMIT: usize = 20;

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub page_delay_ms: u64,
    /// Used when a command doesn't pass `--count`. Non-positive means all.
    pub default_count: i64,
    pub history_path: String,
    /// Number of remembered values per field.
    pub history_limit: usize,
}
#[derive(Clone, Default, serde::Deserialize)]
struct PartialConfig {
    api_key: Option<String>,
    page_delay_ms: Option<u64>,
    default_count: Option<i64>,
    history_path: Option<String>,
    history_limit: Option<usize>,
}
impl Config {
    pub fn init(path: &str) -> Config {
        log::debug!("Loading config from file '{}'", path);
        let cfg = match std::fs::read_to_string(path) {
            Ok(v) => v,
            Err(err) => {
                log::warn!("Failed to read config: {}; Falling back to defaults", err);
                String::new()
            }
        };
        let cfg = match Config::parse(&cfg) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Error while reading config: {}; Falling back to defaults", err);
                Config::default()
            }
        };
        log::info!("Using config: {}", cfg);
        cfg
    }

    pub fn parse(source: &str) -> Result<Config, toml::de::Error> {
        toml::from_str::<PartialConfig>(source).map(Config::from)
    }

    /// `YOUTUBE_API` takes precedence over the key in the config file.
    pub fn with_env_key(self, key: Option<String>) -> Config {
        match key {
            Some(key) if !key.trim().is_empty() => Config {
                api_key: Some(key.trim().to_owned()),
                ..self
            },
            _ => self,
        }
    }

    pub fn api_key(&self) -> anyhow::Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Missing the YouTube API key; set `api_key` or YOUTUBE_API"))
    }

    pub fn page_delay(&self) -> Duration { Duration::from_millis(self.page_delay_ms) }
}
impl Default for Config {
    fn default() -> Self { PartialConfig::default().into() }
}
impl From<PartialConfig> for Config {
    fn from(cfg: PartialConfig) -> Config {
        Config {
            api_key: cfg.api_key,
            page_delay_ms: cfg.page_delay_ms.unwrap_or(DEFAULT_PAGE_DELAY_MS),
            default_count: cfg.default_count.unwrap_or(DEFAULT_COUNT),
            history_path: cfg.history_path.unwrap_or_else(|| DEFAULT_HISTORY_PATH.into()),
            history_limit: cfg.history_limit.unwrap_or(DEFAULT_HISTORY_LIMIT),
        }
    }
}
impl Display for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Config {{")?;
        writeln!(
            f,
            "\tapi_key = {},",
            if self.api_key.is_some() { "..." } else { "<unset>" }
        )?;
        writeln!(f, "\tpage_delay_ms = {},", self.page_delay_ms)?;
        writeln!(f, "\tdefault_count = {},", self.default_count)?;
        writeln!(f, "\thistory_path = '{}',", self.history_path)?;
        writeln!(f, "\thistory_limit = {},", self.history_limit)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let cfg = Config::parse("default_count = 0").unwrap();
        assert_eq!(cfg.default_count, 0);
        assert_eq!(cfg.page_delay(), Duration::from_millis(500));
        assert_eq!(cfg.history_path, "history.json");
        assert_eq!(cfg.history_limit, 20);
        assert!(cfg.api_key().is_err());
    }

    #[test]
    fn empty_file_is_the_default_config() {
        let cfg = Config::parse("").unwrap();
        assert_eq!(cfg.default_count, 30);
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn env_key_overrides_the_file() {
        let cfg = Config::parse("api_key = \"from-file\"").unwrap();
        assert_eq!(cfg.clone().with_env_key(None).api_key().unwrap(), "from-file");
        assert_eq!(cfg.clone().with_env_key(Some("  ".into())).api_key().unwrap(), "from-file");
        assert_eq!(cfg.with_env_key(Some("from-env".into())).api_key().unwrap(), "from-env");
    }

    #[test]
    fn display_hides_the_key() {
        let cfg = Config::parse("api_key = \"secret\"").unwrap();
        let shown = cfg.to_string();
        assert!(!shown.contains("secret"));
        assert!(shown.contains("api_key = ...,"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::parse("page_delay_ms = \"soon\"").is_err());
    }
}
