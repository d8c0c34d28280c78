use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be parsed.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: String,
        /// The raw value that failed to parse
        value: String,
    },

    /// Seed file could not be read or is not a JSON array of seed entries.
    #[error("Failed to load seed file '{path}': {reason}")]
    InvalidSeedFile {
        /// Path configured through `SEED_FILE`
        path: String,
        /// Underlying I/O or JSON error
        reason: String,
    },
}
