use crate::config::{Settings, DEFAULT_MAX_VIDEOS};
use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::{ChannelReport, ChartPoint};
use crate::services::catalog::{list_videos, resolve_uploads_playlist};
use crate::services::metrics::fetch_view_counts;
use crate::services::topics::{aggregate, KeywordLocale, TopicClassifier};
use crate::services::youtube::VideoPlatform;
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub max_videos: usize,
    pub locale: KeywordLocale,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            max_videos: DEFAULT_MAX_VIDEOS,
            locale: KeywordLocale::default(),
        }
    }
}

impl From<&Settings> for AnalysisOptions {
    fn from(settings: &Settings) -> Self {
        AnalysisOptions {
            max_videos: settings.max_videos,
            locale: settings.locale,
        }
    }
}

/// Runs one report: uploads playlist, catalog, view counts, topic aggregation.
pub async fn analyze_channel(
    platform: &dyn VideoPlatform,
    channel_id: &str,
    options: &AnalysisOptions,
) -> AnalyzerResult<ChannelReport> {
    let channel_id = channel_id.trim();
    if channel_id.is_empty() {
        return Err(AnalyzerError::Configuration(
            "Enter a channel ID (not the channel URL) to get started.".to_string(),
        ));
    }

    info!(
        "Analyzing channel {channel_id} (max {} videos, locale {})",
        options.max_videos, options.locale
    );

    let playlist_id = resolve_uploads_playlist(platform, channel_id).await?;
    let entries = list_videos(platform, &playlist_id, options.max_videos).await?;
    let records = fetch_view_counts(platform, entries).await?;
    let aggregation = aggregate(&records, &TopicClassifier::new(options.locale))?;

    let chart = aggregation
        .summaries
        .iter()
        .map(|summary| ChartPoint {
            topic: summary.topic,
            video_count: summary.video_count,
        })
        .collect();

    info!(
        "Channel {channel_id}: {} videos in {} topics",
        records.len(),
        aggregation.summaries.len()
    );

    Ok(ChannelReport {
        channel_id: channel_id.to_string(),
        total_videos: records.len(),
        mean_views: aggregation.global_mean,
        median_views: aggregation.global_median,
        topics: aggregation.summaries,
        chart,
        generated_at: chrono::Utc::now().to_rfc3339(),
    })
}
