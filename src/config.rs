// ABOUTME: Configuration module for the artifact-showcase application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::content::ContentSource;
use crate::errors::{Result, ShowcaseError};
use crate::export::ExportConfig;
use crate::links::Links;
use crate::page::PageOptions;
use crate::resources::Asset;
use crate::server::ServeConfig;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_CONTENT: &str = "content.json";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FETCH_TIMEOUT_MS: u64 = 10000;
const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Global configuration for the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub content_location: String,
    pub host: String,
    pub port: u16,
    pub fetch_timeout_ms: u64,
    pub embed_resources: bool,
    pub debounce_ms: u64,
    pub default_css: Vec<String>,
    pub default_js: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_location: DEFAULT_CONTENT.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            embed_resources: true,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            default_css: Vec::new(),
            default_js: Vec::new(),
        }
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup, falling back to defaults
    /// for unset keys. Numeric values that do not parse are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let parse_number = |key: &str, default: u64| -> Result<u64> {
            match lookup(key) {
                Some(value) => value.trim().parse::<u64>().map_err(|e| {
                    ShowcaseError::ConfigError(format!("{} must be a number: {}", key, e))
                }),
                None => Ok(default),
            }
        };

        let port = parse_number("SHOWCASE_PORT", u64::from(defaults.port))?;
        let port = u16::try_from(port).map_err(|_| {
            ShowcaseError::ConfigError(format!("SHOWCASE_PORT out of range: {}", port))
        })?;

        Ok(Self {
            content_location: lookup("SHOWCASE_CONTENT").unwrap_or(defaults.content_location),
            host: lookup("SHOWCASE_HOST").unwrap_or(defaults.host),
            port,
            fetch_timeout_ms: parse_number("SHOWCASE_FETCH_TIMEOUT_MS", defaults.fetch_timeout_ms)?,
            embed_resources: lookup("SHOWCASE_EMBED_RESOURCES")
                .map(|s| s.to_lowercase() != "false")
                .unwrap_or(defaults.embed_resources),
            debounce_ms: parse_number("SHOWCASE_DEBOUNCE_MS", defaults.debounce_ms)?,
            default_css: lookup("SHOWCASE_CSS")
                .map(|s| split_list(&s))
                .unwrap_or(defaults.default_css),
            default_js: lookup("SHOWCASE_JS")
                .map(|s| split_list(&s))
                .unwrap_or(defaults.default_js),
        })
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    /// Stylesheets and scripts from explicit lists, or the configured defaults.
    fn assets(&self, css: Option<Vec<String>>, js: Option<Vec<String>>) -> Vec<Asset> {
        let css = css.unwrap_or_else(|| self.default_css.clone());
        let js = js.unwrap_or_else(|| self.default_js.clone());
        css.iter()
            .map(|path| Asset::stylesheet(path))
            .chain(js.iter().map(|path| Asset::script(path)))
            .collect()
    }

    fn source(&self, content: Option<String>) -> Result<ContentSource> {
        ContentSource::parse(content.as_deref().unwrap_or(&self.content_location))
    }

    /// Get a serve configuration with defaults from this config
    pub fn get_serve_config(
        &self,
        content: Option<String>,
        port: Option<u16>,
        watch: bool,
        css: Option<Vec<String>>,
        js: Option<Vec<String>>,
        embed_resources: Option<bool>,
    ) -> Result<ServeConfig> {
        Ok(ServeConfig {
            source: self.source(content)?,
            host: self.host.clone(),
            port: port.unwrap_or(self.port),
            fetch_timeout: self.fetch_timeout(),
            watch,
            debounce_ms: self.debounce_ms,
            page: PageOptions {
                assets: self.assets(css, js),
                embed_resources: embed_resources.unwrap_or(self.embed_resources),
                links: Links::Server,
            },
        })
    }

    /// Get an export configuration with defaults from this config
    pub fn get_export_config(
        &self,
        content: Option<String>,
        output_dir: PathBuf,
        base_name: Option<String>,
        css: Option<Vec<String>>,
        js: Option<Vec<String>>,
        embed_resources: Option<bool>,
    ) -> Result<ExportConfig> {
        Ok(ExportConfig {
            source: self.source(content)?,
            output_dir,
            base_name: base_name.unwrap_or_else(|| "slide".to_string()),
            fetch_timeout: self.fetch_timeout(),
            assets: self.assets(css, js),
            embed_resources: embed_resources.unwrap_or(self.embed_resources),
        })
    }
}
