use crate::error::AnalyzerResult;
use crate::models::{CatalogEntry, VideoRecord};
use crate::services::youtube::{VideoPlatform, MAX_PAGE_SIZE};
use log::{info, warn};
use std::collections::HashMap;

/// Attaches view counts to catalog entries, one statistics request per 50 ids.
///
/// Statistics are matched by video id, so the API's response order does not
/// matter. Output order is input order; missing statistics count as 0 views.
pub async fn fetch_view_counts(
    platform: &dyn VideoPlatform,
    entries: Vec<CatalogEntry>,
) -> AnalyzerResult<Vec<VideoRecord>> {
    let mut records = Vec::with_capacity(entries.len());
    let mut batches = 0;

    let mut remaining = entries.into_iter().peekable();
    while remaining.peek().is_some() {
        let batch: Vec<CatalogEntry> = remaining.by_ref().take(MAX_PAGE_SIZE).collect();
        let ids: Vec<String> = batch.iter().map(|e| e.video_id.clone()).collect();

        let views_by_id: HashMap<String, Option<u64>> = platform
            .video_statistics(&ids)
            .await?
            .into_iter()
            .map(|stats| (stats.video_id, stats.view_count))
            .collect();
        batches += 1;

        for entry in batch {
            let views = match views_by_id.get(&entry.video_id) {
                Some(count) => count.unwrap_or(0),
                None => {
                    warn!("No statistics returned for video {}", entry.video_id);
                    0
                }
            };
            records.push(VideoRecord::from_entry(entry, views));
        }
    }

    info!("Fetched statistics for {} videos in {batches} batches", records.len());
    Ok(records)
}
