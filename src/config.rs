//! Configuration management for NeuroTask Server

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    pub extraction: ExtractionConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Generative-language API endpoint settings
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_url: String,
    pub model: String,
    pub api_key: String,
}

/// Extraction pipeline settings
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Upload size cap in bytes
    pub max_upload_bytes: usize,
    /// Deadline for PDF engine acquisition
    pub pdf_acquire_timeout_secs: u64,
    /// Deadline for parsing one PDF document
    pub pdf_parse_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            gemini: GeminiConfig {
                api_url: "https://generativelanguage.googleapis.com".to_string(),
                model: "gemini-1.5-flash".to_string(),
                api_key: String::new(),
            },
            extraction: ExtractionConfig {
                max_upload_bytes: 25 * 1024 * 1024,
                pdf_acquire_timeout_secs: 30,
                pdf_parse_timeout_secs: 60,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        let defaults = Config::default();

        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
            },
            gemini: GeminiConfig {
                api_url: env::var("GEMINI_API_URL").unwrap_or(defaults.gemini.api_url),
                model: env::var("GEMINI_MODEL").unwrap_or(defaults.gemini.model),
                api_key: env::var("GEMINI_API_KEY")?,
            },
            extraction: ExtractionConfig {
                max_upload_bytes: env_parse(
                    "MAX_UPLOAD_BYTES",
                    defaults.extraction.max_upload_bytes,
                ),
                pdf_acquire_timeout_secs: env_parse(
                    "PDF_ACQUIRE_TIMEOUT_SECS",
                    defaults.extraction.pdf_acquire_timeout_secs,
                ),
                pdf_parse_timeout_secs: env_parse(
                    "PDF_PARSE_TIMEOUT_SECS",
                    defaults.extraction.pdf_parse_timeout_secs,
                ),
            },
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
