//! Error types for the Disk Jockey menu bar.
//!
//! Menu actions themselves cannot fail; these cover start-up only.

use thiserror::Error;

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config.toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Missing value for {0}")]
    Missing(&'static str),
}

impl AppError {
    /// Returns a user-friendly message for display on the console.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Config(ConfigError::Parse(_)) => "The bundled configuration is invalid.",
            Self::Config(ConfigError::Missing(_)) => {
                "A required setting is empty. Check your environment overrides."
            }
            Self::Io(_) => "Could not access the file system.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = AppError::from(ConfigError::Missing("logging.level"));
        assert_eq!(
            err.user_message(),
            "A required setting is empty. Check your environment overrides."
        );
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing value for logging.level"
        );

        let err = AppError::from(std::io::Error::other("denied"));
        assert_eq!(err.user_message(), "Could not access the file system.");
    }
}
