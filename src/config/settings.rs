use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, File};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub chain: ChainSettings,
    pub social: SocialSettings,
    pub api: ApiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainSettings {
    /// Indexer base URL; the API key is appended as the last path segment.
    pub indexer_url: String,
    pub indexer_api_key: Option<String>,
    pub node_rpc_url: String,
    /// Network launch date (YYYY-MM-DD). Synthesized activity never predates it.
    pub genesis_date: String,
    pub max_transfers: u32,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialSettings {
    pub api_url: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    pub host: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "Airdrop Checker".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
            },
            chain: ChainSettings {
                indexer_url: "https://base-mainnet.g.alchemy.com/v2".to_string(),
                indexer_api_key: None,
                node_rpc_url: "https://mainnet.base.org".to_string(),
                genesis_date: "2023-08-09".to_string(), // Base mainnet launch
                max_transfers: 1000,
                timeout_seconds: 30,
            },
            social: SocialSettings {
                api_url: "https://api.neynar.com".to_string(),
                api_key: None,
                timeout_seconds: 30,
            },
            api: ApiSettings {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("AIRDROP_CHECKER").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Defaults overlaid by a single explicit file, then the environment.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix("AIRDROP_CHECKER").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        for (name, url) in [
            ("chain.indexer_url", &self.chain.indexer_url),
            ("chain.node_rpc_url", &self.chain.node_rpc_url),
            ("social.api_url", &self.social.api_url),
        ] {
            reqwest::Url::parse(url).map_err(|e| format!("{} is not a valid URL: {}", name, e))?;
        }

        if self.chain.max_transfers == 0 || self.chain.max_transfers > 1000 {
            return Err(format!(
                "chain.max_transfers must be between 1 and 1000, got {}",
                self.chain.max_transfers
            ));
        }

        if self.chain.timeout_seconds == 0 || self.social.timeout_seconds == 0 {
            return Err("Timeouts must be greater than zero".to_string());
        }

        self.chain.genesis()?;

        Ok(())
    }
}

impl ChainSettings {
    pub fn indexer_credential(&self) -> Option<&str> {
        usable_credential(self.indexer_api_key.as_deref())
    }

    pub fn genesis(&self) -> Result<DateTime<Utc>, String> {
        NaiveDate::parse_from_str(&self.genesis_date, "%Y-%m-%d")
            .map(|date| date.and_time(NaiveTime::MIN).and_utc())
            .map_err(|e| format!("Invalid chain.genesis_date {}: {}", self.genesis_date, e))
    }
}

impl SocialSettings {
    pub fn credential(&self) -> Option<&str> {
        usable_credential(self.api_key.as_deref())
    }
}

/// Blank keys and untouched `your_..._here` template values count as missing.
fn usable_credential(key: Option<&str>) -> Option<&str> {
    let key = key?.trim();
    if key.is_empty() || (key.starts_with("your_") && key.ends_with("_here")) {
        return None;
    }
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_settings_validate() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(
            settings.chain.genesis().unwrap(),
            Utc.with_ymd_and_hms(2023, 8, 9, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_template_credentials_are_absent() {
        let mut settings = Settings::default();
        assert_eq!(settings.chain.indexer_credential(), None);

        settings.chain.indexer_api_key = Some("your_alchemy_api_key_here".to_string());
        assert_eq!(settings.chain.indexer_credential(), None);

        settings.social.api_key = Some("   ".to_string());
        assert_eq!(settings.social.credential(), None);

        settings.social.api_key = Some("abc123".to_string());
        assert_eq!(settings.social.credential(), Some("abc123"));
    }

    #[test]
    fn test_from_file_overrides_defaults() {
        let path = std::env::temp_dir().join(format!("airdrop-checker-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[chain]\nmax_transfers = 250\ngenesis_date = \"2023-07-13\"\n\n[api]\nport = 9090\n",
        )
        .unwrap();

        let settings = Settings::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.chain.max_transfers, 250);
        assert_eq!(settings.chain.genesis_date, "2023-07-13");
        assert_eq!(settings.api.port, 9090);
        assert_eq!(settings.social.api_url, "https://api.neynar.com");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_file_missing_is_error() {
        assert!(Settings::from_file("/nonexistent/airdrop-checker.toml").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.chain.max_transfers = 5000;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.chain.genesis_date = "August 2023".to_string();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.social.api_url = "not a url".to_string();
        assert!(settings.validate().is_err());
    }
}
