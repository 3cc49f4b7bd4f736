//! Topic statistics for the recent uploads of a YouTube channel.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
pub mod services;

use crate::config::{create_cors, Settings};
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::services::youtube::VideoPlatform;
use rocket::{get, routes, Build, Rocket};
use std::sync::Arc;

pub struct AppState {
    pub settings: Settings,
    /// `None` while no API key is configured.
    pub platform: Option<Arc<dyn VideoPlatform>>,
}

impl AppState {
    pub fn platform(&self) -> AnalyzerResult<&Arc<dyn VideoPlatform>> {
        self.platform.as_ref().ok_or_else(|| {
            AnalyzerError::Configuration(
                "Set YOUTUBE_API_KEY and enter a channel ID to get started.".to_string(),
            )
        })
    }
}

#[get("/")]
fn index() -> &'static str {
    "channel-insights backend"
}

pub fn build_rocket(state: AppState) -> anyhow::Result<Rocket<Build>> {
    let cors = create_cors(&state.settings)?;

    Ok(rocket::build()
        .manage(state)
        .attach(cors)
        .mount("/", routes![index])
        .mount(
            "/report",
            routes![api::channel_report, api::missing_channel],
        ))
}
