//! Server configuration from the environment.

use serde::{Deserialize, Serialize};

/// Top-level TaskChat configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server port.
    pub port: u16,
}

impl ServerConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        Self { port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        std::env::remove_var("PORT");
        let config = ServerConfig::from_env();
        assert_eq!(config.port, 8000);
    }
}
