use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
    pub seed: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub tokens: Vec<String>,
}

impl Config {
    /// Defaults, then `codes.toml` if present, then `CODES_*` environment variables
    /// (`CODES_SERVER__PORT=9000`, `CODES_AUTH__TOKENS=a,b`).
    pub fn load() -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::with_name("codes").required(false))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    fn environment() -> Environment {
        Environment::with_prefix("CODES")
            .prefix_separator("_")
            .separator("__")
            .list_separator(",")
            .with_list_parse_key("auth.tokens")
            .try_parsing(true)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("database.path", "data/codes.db")?
            .set_default("database.seed", true)?
            .set_default("logging.level", "info")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn defaults_deserialize() {
        let config: Config = Config::defaults()
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.database.path, "data/codes.db");
        assert!(config.database.seed);
        assert_eq!(config.logging.level, "info");
        assert!(config.auth.tokens.is_empty());
    }

    #[test]
    fn toml_overrides_defaults() {
        let toml = r#"
            [server]
            port = 9100

            [auth]
            tokens = ["alpha", "beta"]
        "#;
        let config: Config = Config::defaults()
            .unwrap()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.auth.tokens, ["alpha", "beta"]);
    }

    #[test]
    fn environment_overrides_port_and_token_list() {
        let vars = config::Map::from([
            ("CODES_SERVER__PORT".to_string(), "9000".to_string()),
            ("CODES_AUTH__TOKENS".to_string(), "alpha,123".to_string()),
        ]);
        let config: Config = Config::defaults()
            .unwrap()
            .add_source(Config::environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.auth.tokens, ["alpha", "123"]);
    }
}
