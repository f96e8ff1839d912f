use anyhow::{Context, Result, bail};
use std::collections::HashMap;

pub const DEFAULT_CHAT_ENDPOINT: &str = "http://127.0.0.1:5001/api/chat";
pub const DEFAULT_TEMPLATE_PATH: &str = "/download/template";

/// Bundled config shipped with every build (and the only source on wasm,
/// where there is no process environment).
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub chat_endpoint: String,
    pub template_path: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            chat_endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
            template_path: DEFAULT_TEMPLATE_PATH.to_string(),
        }
    }
}

impl WidgetConfig {
    /// Resolve `CHAT_ENDPOINT` and `TEMPLATE_PATH` through `lookup`, falling
    /// back to the built-in literals for unset or blank keys.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let chat_endpoint = read("CHAT_ENDPOINT").unwrap_or(defaults.chat_endpoint);
        let parsed = reqwest::Url::parse(&chat_endpoint)
            .with_context(|| format!("CHAT_ENDPOINT is not an absolute URL: {chat_endpoint}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("CHAT_ENDPOINT must use http or https: {chat_endpoint}");
        }

        let template_path = read("TEMPLATE_PATH").unwrap_or(defaults.template_path);

        Ok(Self {
            chat_endpoint,
            template_path,
        })
    }

    /// Process environment first, then the bundled `assets/config.env`.
    /// An invalid configuration is logged and the defaults are used.
    pub fn load() -> Self {
        let bundled = parse_env_lines(BUNDLED_CONFIG);
        let lookup = |key: &str| {
            std::env::var(key)
                .ok()
                .or_else(|| bundled.get(key).cloned())
        };
        match Self::resolve(lookup) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "invalid widget config, using defaults");
                Self::default()
            }
        }
    }
}

/// Parse `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_lines(source: &str) -> HashMap<String, String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = WidgetConfig::resolve(|_| None).unwrap();
        assert_eq!(config, WidgetConfig::default());
        assert_eq!(config.chat_endpoint, "http://127.0.0.1:5001/api/chat");
        assert_eq!(config.template_path, "/download/template");
    }

    #[test]
    fn overrides_are_applied() {
        let config = WidgetConfig::resolve(lookup_from(&[
            ("CHAT_ENDPOINT", "https://chat.example.com/api/chat"),
            ("TEMPLATE_PATH", "/files/template.zip"),
        ]))
        .unwrap();
        assert_eq!(config.chat_endpoint, "https://chat.example.com/api/chat");
        assert_eq!(config.template_path, "/files/template.zip");
    }

    #[test]
    fn blank_values_fall_back() {
        let config = WidgetConfig::resolve(lookup_from(&[("CHAT_ENDPOINT", "  ")])).unwrap();
        assert_eq!(config.chat_endpoint, DEFAULT_CHAT_ENDPOINT);
    }

    #[test]
    fn rejects_relative_or_non_http_endpoints() {
        assert!(WidgetConfig::resolve(lookup_from(&[("CHAT_ENDPOINT", "/api/chat")])).is_err());
        assert!(
            WidgetConfig::resolve(lookup_from(&[("CHAT_ENDPOINT", "ftp://host/api/chat")]))
                .is_err()
        );
    }

    #[test]
    fn parses_env_lines() {
        let parsed = parse_env_lines(
            "# comment\n\nCHAT_ENDPOINT = http://localhost:5001/api/chat\nNOT A PAIR\nTEMPLATE_PATH=/t\n",
        );
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["CHAT_ENDPOINT"], "http://localhost:5001/api/chat");
        assert_eq!(parsed["TEMPLATE_PATH"], "/t");
    }

    #[test]
    fn bundled_config_is_valid() {
        let bundled = parse_env_lines(BUNDLED_CONFIG);
        assert!(WidgetConfig::resolve(|key| bundled.get(key).cloned()).is_ok());
    }
}
