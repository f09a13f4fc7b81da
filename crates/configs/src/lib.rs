use std::path::Path;

use anyhow::anyhow;
use anyhow::Result;
use common::utils::logging::LogFormat;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// JSON array of recipes read once at startup
    #[serde(default = "default_bootstrap_path")]
    pub bootstrap_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { bootstrap_path: default_bootstrap_path() }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 8080 }
fn default_bootstrap_path() -> String { "recipes.json".into() }

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Config file if present, otherwise defaults; env overrides on top.
    pub fn load_and_validate() -> Result<Self> {
        let path = config_path();
        let mut cfg = if Path::new(&path).exists() { load_from_file(&path)? } else { AppConfig::default() };
        cfg.apply_env_overrides();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary lookup (the process env in production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        // PORT is what most PaaS runtimes hand out; SERVER_PORT wins when both are set
        if let Some(port) = lookup("SERVER_PORT").or_else(|| lookup("PORT")).and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
        if let Some(path) = lookup("RECIPES_FILE") {
            self.store.bootstrap_path = path;
        }
        if let Some(format) = lookup("LOG_FORMAT").and_then(|f| f.parse::<LogFormat>().ok()) {
            self.logging.format = format;
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.store.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StoreConfig {
    pub fn validate(&self) -> Result<()> {
        if self.bootstrap_path.trim().is_empty() {
            return Err(anyhow!("store.bootstrap_path is empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_are_sane() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.store.bootstrap_path, "recipes.json");
        assert_eq!(cfg.logging.format, LogFormat::Compact);
    }

    #[test]
    fn parses_partial_toml() {
        let cfg = parse(
            r#"
            [server]
            port = 9000

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.store.bootstrap_path, "recipes.json");
        assert_eq!(cfg.logging.format, LogFormat::Json);
    }

    #[test]
    fn env_overrides_take_precedence() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("PORT", "7000"),
            ("RECIPES_FILE", "/tmp/seed.json"),
            ("LOG_FORMAT", "json"),
        ]);
        let mut cfg = AppConfig::default();
        cfg.apply_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.server.port, 7000);
        assert_eq!(cfg.store.bootstrap_path, "/tmp/seed.json");
        assert_eq!(cfg.logging.format, LogFormat::Json);

        let env: HashMap<&str, &str> = HashMap::from([("PORT", "7000"), ("SERVER_PORT", "7100")]);
        let mut cfg = AppConfig::default();
        cfg.apply_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.server.port, 7100);
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut cfg = AppConfig::default();
        cfg.server.port = 0;
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.store.bootstrap_path = "  ".into();
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.server.host = "".into();
        cfg.server.worker_threads = Some(0);
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.worker_threads, Some(4));
    }
}
