use crate::catalog::Language;
use anyhow::{Context, Result};

pub const DEFAULT_TRANSLATE_API_URL: &str = "https://api.mymemory.translated.net/get";

#[derive(Debug, Clone)]
pub struct Config {
    // Translation endpoint
    pub translate_api_url: String,

    // Initial selector values
    pub source_language: Language,
    pub target_language: Language,

    // Speech
    pub speech_enabled: bool,
    pub speech_bin: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            translate_api_url: std::env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSLATE_API_URL.to_string()),

            source_language: language_from_env("SOURCE_LANGUAGE", Language::ENGLISH_GB)?,
            target_language: language_from_env("TARGET_LANGUAGE", Language::HINDI)?,

            speech_enabled: std::env::var("SPEECH_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            speech_bin: std::env::var("SPEECH_BIN")
                .unwrap_or_else(|_| default_speech_bin().to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translate_api_url: DEFAULT_TRANSLATE_API_URL.to_string(),
            source_language: Language::ENGLISH_GB,
            target_language: Language::HINDI,
            speech_enabled: true,
            speech_bin: default_speech_bin().to_string(),
        }
    }
}

fn language_from_env(var: &str, default: Language) -> Result<Language> {
    match std::env::var(var) {
        Ok(code) => Language::from_code(code.trim()).with_context(|| format!("{} is invalid", var)),
        Err(_) => Ok(default),
    }
}

fn default_speech_bin() -> &'static str {
    if cfg!(target_os = "macos") {
        "say"
    } else {
        "espeak-ng"
    }
}
