use serde::Deserialize;

/// Deployment environment, selects the log format
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,
    #[serde(default)]
    pub env: Environment,
    /// Comma-separated origins. Unset means any origin is allowed.
    pub allowed_origins: Option<String>,
    /// Reset the demo dataset before serving
    #[serde(default)]
    pub seed_on_startup: bool,
}

fn default_database_url() -> String {
    "sqlite://village.db".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_db_max_connections() -> u32 {
    5
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    /// Parse `ALLOWED_ORIGINS`, dropping blanks. `None` when unset or empty.
    pub fn parsed_allowed_origins(&self) -> Option<Vec<String>> {
        let origins: Vec<String> = self
            .allowed_origins
            .as_deref()?
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        if origins.is_empty() {
            None
        } else {
            Some(origins)
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> ApiConfig {
        envy::from_iter(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
        .expect("valid config")
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.database_url, "sqlite://village.db");
        assert_eq!(config.bind_address(), "0.0.0.0:3001");
        assert_eq!(config.db_max_connections, 5);
        assert!(config.env.is_development());
        assert!(!config.seed_on_startup);
        assert!(config.parsed_allowed_origins().is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("ENV", "production"),
            ("SEED_ON_STARTUP", "true"),
        ]);
        assert_eq!(config.port, 8080);
        assert!(config.env.is_production());
        assert!(config.seed_on_startup);
    }

    #[test]
    fn test_allowed_origins_parsing() {
        let config = config_from(&[(
            "ALLOWED_ORIGINS",
            "http://localhost:5173, https://village.example ,",
        )]);
        assert_eq!(
            config.parsed_allowed_origins(),
            Some(vec![
                "http://localhost:5173".to_string(),
                "https://village.example".to_string()
            ])
        );

        let blank = config_from(&[("ALLOWED_ORIGINS", " , ")]);
        assert!(blank.parsed_allowed_origins().is_none());
    }
}
