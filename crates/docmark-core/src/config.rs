//! Configuration module
//!
//! Environment-driven configuration loaded once at startup. The gateway
//! endpoint and token are the only required settings; everything else has
//! development defaults.

use std::env;

use crate::policy::DEFAULT_ACCEPTED_CONTENT_TYPES;

const SERVER_PORT: u16 = 4000;
const CONVERSION_TIMEOUT_SECS: u64 = 120;
const MAX_FILE_SIZE_MB: usize = 10;
const HTTP_CONCURRENCY_LIMIT: usize = 10_000;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    // Conversion gateway wiring
    pub conversion_api_url: String,
    pub conversion_api_token: String,
    pub conversion_timeout_seconds: u64,
    // Upload policy
    pub accepted_content_types: Vec<String>,
    pub max_file_size_bytes: usize,
    // Server limits
    pub http_concurrency_limit: usize,
}

impl Config {
    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production = environment.to_lowercase() == "production"
            || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let accepted_content_types = env::var("ACCEPTED_CONTENT_TYPES")
            .unwrap_or_else(|_| DEFAULT_ACCEPTED_CONTENT_TYPES.join(","))
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();

        let max_file_size_mb = env::var("MAX_FILE_SIZE_MB")
            .unwrap_or_else(|_| MAX_FILE_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_FILE_SIZE_MB);

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            environment,
            cors_origins,
            conversion_api_url: env::var("CONVERSION_API_URL")
                .map_err(|_| anyhow::anyhow!("CONVERSION_API_URL must be set"))?,
            conversion_api_token: env::var("CONVERSION_API_TOKEN")
                .map_err(|_| anyhow::anyhow!("CONVERSION_API_TOKEN must be set"))?,
            conversion_timeout_seconds: env::var("CONVERSION_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| CONVERSION_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(CONVERSION_TIMEOUT_SECS),
            accepted_content_types,
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            http_concurrency_limit: env::var("HTTP_CONCURRENCY_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(HTTP_CONCURRENCY_LIMIT)
                .max(1),
        };

        config.validate()?;
        Ok(config)
    }

    /// Fail fast on settings that would only surface as runtime errors later.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !self.conversion_api_url.starts_with("http://")
            && !self.conversion_api_url.starts_with("https://")
        {
            return Err(anyhow::anyhow!(
                "CONVERSION_API_URL must be an http(s) URL, got '{}'",
                self.conversion_api_url
            ));
        }
        if self.conversion_api_token.trim().is_empty() {
            return Err(anyhow::anyhow!("CONVERSION_API_TOKEN cannot be empty"));
        }
        if self.accepted_content_types.is_empty() {
            return Err(anyhow::anyhow!(
                "ACCEPTED_CONTENT_TYPES cannot be empty; the service would reject every upload"
            ));
        }
        if self.max_file_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_FILE_SIZE_MB must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            server_port: 4000,
            environment: "test".to_string(),
            cors_origins: vec!["*".to_string()],
            conversion_api_url: "https://conversion.example.com/tomarkdown".to_string(),
            conversion_api_token: "secret".to_string(),
            conversion_timeout_seconds: 120,
            accepted_content_types: DEFAULT_ACCEPTED_CONTENT_TYPES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_file_size_bytes: 10 * 1024 * 1024,
            http_concurrency_limit: 10_000,
        }
    }

    #[test]
    fn test_validate_accepts_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_http_gateway_url() {
        let mut config = valid_config();
        config.conversion_api_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_token() {
        let mut config = valid_config();
        config.conversion_api_token = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_accepted_set() {
        let mut config = valid_config();
        config.accepted_content_types.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_is_production() {
        let mut config = valid_config();
        assert!(!config.is_production());
        config.environment = "Production".to_string();
        assert!(config.is_production());
    }
}
