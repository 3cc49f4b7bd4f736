use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::CatalogEntry;
use crate::services::youtube::{VideoPlatform, MAX_PAGE_SIZE};
use log::{debug, info};

// uploads playlist id of a channel; a lookup with no result is NotFound
pub async fn resolve_uploads_playlist(
    platform: &dyn VideoPlatform,
    channel_id: &str,
) -> AnalyzerResult<String> {
    let channel = platform
        .lookup_channels(channel_id)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AnalyzerError::NotFound(channel_id.to_string()))?;

    let playlist_id = channel.uploads_playlist_id.ok_or_else(|| {
        AnalyzerError::Upstream(format!("channel {channel_id} has no uploads playlist"))
    })?;

    debug!("Uploads playlist for {channel_id}: {playlist_id}");
    Ok(playlist_id)
}

// Returns at most `max_results` videos of a playlist, newest first as the API orders them.
pub async fn list_videos(
    platform: &dyn VideoPlatform,
    playlist_id: &str,
    max_results: usize,
) -> AnalyzerResult<Vec<CatalogEntry>> {
    let mut videos: Vec<CatalogEntry> = Vec::new();
    let mut next_page_token: Option<String> = None;

    while videos.len() < max_results {
        let page_size = MAX_PAGE_SIZE.min(max_results - videos.len());
        let page = platform
            .playlist_page(playlist_id, page_size, next_page_token.as_deref())
            .await?;

        let fetched = page.items.len();
        let remaining = max_results - videos.len();
        videos.extend(page.items.into_iter().take(remaining));

        // An empty page cannot make progress, whatever the token says.
        match page.next_page_token {
            Some(token) if fetched > 0 => next_page_token = Some(token),
            _ => break,
        }
    }

    info!("Found {} videos in playlist {playlist_id}", videos.len());
    Ok(videos)
}
