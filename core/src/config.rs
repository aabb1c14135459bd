use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_CUSTOMERS_PATH: &str = "/api/v1/customers";
pub const DEFAULT_UI_HOST: &str = "127.0.0.1";
pub const DEFAULT_UI_PORT: u16 = 2114;

pub const ENV_API_BASE_URL: &str = "C360_API_BASE_URL";
pub const ENV_UI_HOST: &str = "C360_UI_HOST";
pub const ENV_UI_PORT: &str = "C360_UI_PORT";

/// Where the profile lookup service lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub customers_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.into(),
            customers_path: DEFAULT_CUSTOMERS_PATH.into(),
        }
    }
}

impl ApiConfig {
    /// Full URL of the batched lookup endpoint.
    pub fn customers_endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.customers_path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

/// Local listener for the UI host command loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub host: String,
    pub port: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_UI_HOST.into(),
            port: DEFAULT_UI_PORT,
        }
    }
}

impl UiConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

impl DashboardConfig {
    /// Load from a JSON file. Sections and keys left out keep their defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: DashboardConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        log::debug!("loaded config from {path}: {config:?}");
        Ok(config)
    }

    /// Apply `C360_*` environment variables on top of the current values.
    pub fn with_env_overrides(self) -> anyhow::Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Same as `with_env_overrides`, reading variables through `lookup`.
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        if let Some(url) = lookup(ENV_API_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
        if let Some(host) = lookup(ENV_UI_HOST).filter(|v| !v.trim().is_empty()) {
            self.ui.host = host.trim().to_string();
        }
        if let Some(port) = lookup(ENV_UI_PORT).filter(|v| !v.trim().is_empty()) {
            self.ui.port = port
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid {ENV_UI_PORT} '{port}': {e}"))?;
        }
        Ok(self)
    }

    /// Config with hardcoded defaults for use in unit tests.
    pub fn default_test() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://127.0.0.1:9".into(),
                customers_path: DEFAULT_CUSTOMERS_PATH.into(),
            },
            ui: UiConfig {
                host: DEFAULT_UI_HOST.into(),
                port: 0,
            },
        }
    }
}
