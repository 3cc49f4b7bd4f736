use crate::error::AnalyzerError;
use crate::models::ChannelReport;
use crate::services::report::{analyze_channel, AnalysisOptions};
use crate::AppState;
use log::error;
use rocket::serde::json::Json;
use rocket::{get, State};

#[get("/<channel_id>?<max>&<locale>")]
pub async fn channel_report(
    channel_id: &str,
    max: Option<usize>,
    locale: Option<&str>,
    state: &State<AppState>,
) -> Result<Json<ChannelReport>, AnalyzerError> {
    let platform = state.platform()?;

    // `max` can lower the configured limit, never raise it.
    let mut options = AnalysisOptions::from(&state.settings);
    if let Some(max) = max {
        options.max_videos = max.min(state.settings.max_videos);
    }
    if let Some(locale) = locale {
        options.locale = locale.parse().map_err(AnalyzerError::Configuration)?;
    }

    match analyze_channel(platform.as_ref(), channel_id, &options).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            error!("Report for channel {channel_id} failed: {e}");
            Err(e)
        }
    }
}

#[get("/")]
pub async fn missing_channel() -> Result<Json<ChannelReport>, AnalyzerError> {
    Err(AnalyzerError::Configuration(
        "Enter a channel ID (not the channel URL) to get started.".to_string(),
    ))
}
