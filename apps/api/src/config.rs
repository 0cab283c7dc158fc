use std::str::FromStr;

use anyhow::{Context, Result};

const DEFAULT_OCR_API_URL: &str = "https://api.ocr.space/parse/image";
const DEFAULT_INFERENCE_API_URL: &str = "https://router.huggingface.co/v1/chat/completions";
const DEFAULT_MODEL: &str = "mistralai/Mistral-7B-Instruct-v0.3";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub ocr_api_key: String,
    pub ocr_api_url: String,
    pub ocr_language: String,
    pub hf_api_token: String,
    pub inference_api_url: String,
    pub inference_model: String,
    pub inference_max_tokens: u32,
    pub inference_temperature: f32,
    pub http_timeout_secs: u64,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            ocr_api_key: require_env("OCR_API_KEY")?,
            ocr_api_url: env_or("OCR_API_URL", DEFAULT_OCR_API_URL),
            ocr_language: env_or("OCR_LANGUAGE", "eng"),
            hf_api_token: require_env("HF_API_TOKEN")?,
            inference_api_url: env_or("INFERENCE_API_URL", DEFAULT_INFERENCE_API_URL),
            inference_model: env_or("INFERENCE_MODEL", DEFAULT_MODEL),
            inference_max_tokens: parse_env("INFERENCE_MAX_TOKENS", 500)?,
            inference_temperature: parse_env("INFERENCE_TEMPERATURE", 0.7)?,
            http_timeout_secs: parse_env("HTTP_TIMEOUT_SECS", 120)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 5 * 1024 * 1024)?,
            port: parse_env("PORT", 8080)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("{key} has an invalid value '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_accepts_padded_number() {
        let port: u16 = parse_value("PORT", " 9090 ").unwrap();
        assert_eq!(port, 9090);
    }

    #[test]
    fn test_parse_value_rejects_garbage_with_key_in_message() {
        let err = parse_value::<u32>("INFERENCE_MAX_TOKENS", "lots").unwrap_err();
        assert!(err.to_string().contains("INFERENCE_MAX_TOKENS"));
    }

    #[test]
    fn test_parse_value_float_temperature() {
        let t: f32 = parse_value("INFERENCE_TEMPERATURE", "0.25").unwrap();
        assert!((t - 0.25).abs() < f32::EPSILON);
    }
}
