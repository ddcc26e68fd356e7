//! Configuration module
//!
//! Environment-driven configuration for the API: server port, CORS, the video
//! storage directory, and the upload size limit.

use std::env;

const MAX_VIDEO_SIZE_MB: usize = 50;
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_VIDEO_STORAGE_PATH: &str = "videos";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    server_port: u16,
    cors_origins: Vec<String>,
    environment: String,
    video_storage_path: String,
    max_video_size_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let max_video_size_mb = env::var("MAX_VIDEO_SIZE_MB")
            .unwrap_or_else(|_| MAX_VIDEO_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(MAX_VIDEO_SIZE_MB);

        let config = Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
            video_storage_path: env::var("VIDEO_STORAGE_PATH")
                .unwrap_or_else(|_| DEFAULT_VIDEO_STORAGE_PATH.to_string()),
            max_video_size_bytes: max_video_size_mb * 1024 * 1024,
        };

        config.validate()?;
        Ok(config)
    }

    /// Build a configuration directly, bypassing the environment. Used by tests.
    pub fn for_testing(video_storage_path: impl Into<String>) -> Self {
        Config {
            server_port: DEFAULT_PORT,
            cors_origins: vec!["*".to_string()],
            environment: "test".to_string(),
            video_storage_path: video_storage_path.into(),
            max_video_size_bytes: MAX_VIDEO_SIZE_MB * 1024 * 1024,
        }
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.is_production() && self.cors_origins.contains(&"*".to_string()) {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.max_video_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_VIDEO_SIZE_MB must be greater than 0"));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn video_storage_path(&self) -> &str {
        &self.video_storage_path
    }

    pub fn max_video_size_bytes(&self) -> usize {
        self.max_video_size_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::for_testing("videos");
        assert_eq!(config.server_port(), 3000);
        assert_eq!(config.max_video_size_bytes(), 50 * 1024 * 1024);
        assert_eq!(config.video_storage_path(), "videos");
        assert!(!config.is_production());
    }

    #[test]
    fn test_wildcard_cors_rejected_in_production() {
        let mut config = Config::for_testing("videos");
        config.environment = "production".to_string();
        assert!(config.validate().is_err());

        config.cors_origins = vec!["https://example.com".to_string()];
        assert!(config.validate().is_ok());
    }
}
