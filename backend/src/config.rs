use crate::error::{AnalyzerError, AnalyzerResult};
use crate::services::topics::KeywordLocale;
use crate::services::youtube::{VideoPlatform, YouTubeDataApi};
use crate::AppState;
use anyhow::Result;
use env_logger::Builder;
use log::{info, warn, LevelFilter};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use std::str::FromStr;
use std::sync::Arc;

pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_MAX_VIDEOS: usize = 100;
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub max_videos: usize,
    pub locale: KeywordLocale,
    pub frontend_origin: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            max_videos: DEFAULT_MAX_VIDEOS,
            locale: KeywordLocale::default(),
            frontend_origin: DEFAULT_FRONTEND_ORIGIN.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    pub fn from_env() -> AnalyzerResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from any key/value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> AnalyzerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Settings::default();

        let api_base_url = get("YOUTUBE_API_BASE_URL").unwrap_or(defaults.api_base_url);
        url::Url::parse(&api_base_url).map_err(|e| {
            AnalyzerError::Configuration(format!("YOUTUBE_API_BASE_URL is not a valid URL: {e}"))
        })?;

        Ok(Settings {
            api_key: get("YOUTUBE_API_KEY"),
            api_base_url,
            max_videos: parse_var("MAX_VIDEOS", get("MAX_VIDEOS"), defaults.max_videos)?,
            locale: parse_var("TOPIC_LOCALE", get("TOPIC_LOCALE"), defaults.locale)?,
            frontend_origin: get("FRONTEND_ORIGIN").unwrap_or(defaults.frontend_origin),
            request_timeout_secs: parse_var(
                "REQUEST_TIMEOUT_SECS",
                get("REQUEST_TIMEOUT_SECS"),
                defaults.request_timeout_secs,
            )?,
        })
    }
}

fn parse_var<T>(name: &str, value: Option<String>, default: T) -> AnalyzerResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| AnalyzerError::Configuration(format!("{name} has invalid value '{raw}': {e}"))),
        None => Ok(default),
    }
}

pub fn init_logger() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn create_platform(settings: &Settings) -> AnalyzerResult<Arc<dyn VideoPlatform>> {
    let api_key = settings.api_key.clone().ok_or_else(|| {
        AnalyzerError::Configuration(
            "Set YOUTUBE_API_KEY and enter a channel ID to get started.".to_string(),
        )
    })?;

    let api = YouTubeDataApi::new(
        api_key,
        &settings.api_base_url,
        settings.request_timeout_secs,
    )?;
    info!("Using YouTube Data API at: {}", settings.api_base_url);

    Ok(Arc::new(api))
}

/// The server starts without a credential; every report then answers with the
/// configuration prompt.
pub fn create_app_state(settings: Settings) -> AppState {
    let platform = match create_platform(&settings) {
        Ok(platform) => Some(platform),
        Err(e) => {
            warn!("YouTube client not configured: {e}");
            None
        }
    };

    AppState { settings, platform }
}

pub fn create_cors(settings: &Settings) -> Result<rocket_cors::Cors> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::some_exact(&[settings.frontend_origin.as_str()]))
        .allowed_methods(
            vec![Method::Get, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .to_cors()
        .map_err(|e| anyhow::anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
