use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,

    pub host: String,
    pub port: u16,

    /// JSON file of colleges and courses loaded at startup, if set
    pub seed_file: Option<String>,
    /// Clear existing colleges and courses before seeding
    pub seed_force: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required =
            |name: &str| var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()));

        let port = match var("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| invalid("PORT", value))?,
            None => DEFAULT_PORT,
        };

        let seed_force = match var("SEED_FORCE") {
            Some(value) => parse_bool(&value).ok_or_else(|| invalid("SEED_FORCE", value))?,
            None => false,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            seed_file: var("SEED_FILE"),
            seed_force,
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn invalid(name: &str, value: String) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    }
}
