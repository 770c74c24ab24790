// runtime settings, all taken from the environment

use anyhow::{bail, Context};
use chrono::NaiveDate;
use std::path::PathBuf;

use crate::feed;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub endpoint: String,
    pub api_key: String,
    pub date: NaiveDate,
    /// Read the response body from here instead of the network.
    pub feed_file: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let date = match var("NEO_DATE") {
            Some(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
                .with_context(|| format!("NEO_DATE {:?} is not YYYY-MM-DD", text))?,
            None => chrono::Local::now().date_naive(),
        };
        let log_level = var("NEO_LOG")
            .map(|level| level.trim().to_ascii_lowercase())
            .unwrap_or_else(|| "info".to_string());
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            bail!("NEO_LOG {:?} is not one of {}", log_level, LOG_LEVELS.join(", "));
        }

        Ok(Config {
            endpoint: var("NEO_FEED_URL").unwrap_or_else(|| feed::FEED_URL.to_string()),
            api_key: var("NEO_API_KEY").unwrap_or_else(|| feed::DEMO_KEY.to_string()),
            date,
            feed_file: var("NEO_FEED_FILE").map(PathBuf::from),
            log_level,
        })
    }

    pub fn date_key(&self) -> String {
        feed::date_key(self.date)
    }

    pub fn request_url(&self) -> String {
        feed::request_url(&self.endpoint, self.date, &self.api_key)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test() {
        let config = config(&[("NEO_DATE", "2024-03-01")]).unwrap();
        assert_eq!(config.endpoint, feed::FEED_URL);
        assert_eq!(config.api_key, "DEMO_KEY");
        assert_eq!(config.date_key(), "2024-03-01");
        assert_eq!(config.feed_file, None);
        assert_eq!(config.log_level, "info");
        assert_eq!(
            config.request_url(),
            "https://api.nasa.gov/neo/rest/v1/feed\
             ?start_date=2024-03-01&end_date=2024-03-01&api_key=DEMO_KEY"
        );
    }

    #[test]
    fn overrides() {
        let config = config(&[
            ("NEO_FEED_URL", "http://localhost:8080/feed"),
            ("NEO_API_KEY", "k3y"),
            ("NEO_DATE", " 2020-02-29 "),
            ("NEO_FEED_FILE", "/tmp/feed.json"),
            ("NEO_LOG", "DEBUG"),
        ])
        .unwrap();
        assert_eq!(
            config.request_url(),
            "http://localhost:8080/feed\
             ?start_date=2020-02-29&end_date=2020-02-29&api_key=k3y"
        );
        assert_eq!(config.feed_file, Some(PathBuf::from("/tmp/feed.json")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn defaults_to_today() {
        let before = chrono::Local::now().date_naive();
        let config = config(&[("NEO_DATE", ""), ("NEO_API_KEY", "  ")]).unwrap();
        let after = chrono::Local::now().date_naive();
        assert!(config.date == before || config.date == after);
        assert_eq!(config.api_key, "DEMO_KEY");
    }

    #[test]
    fn invalid() {
        assert!(config(&[("NEO_DATE", "2024-02-30")]).is_err());
        assert!(config(&[("NEO_DATE", "01/03/2024")]).is_err());
        let err = config(&[("NEO_LOG", "loud")]).unwrap_err();
        assert!(err.to_string().contains("NEO_LOG"));
    }
}
