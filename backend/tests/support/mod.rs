#![allow(dead_code)]

use async_trait::async_trait;
use channel_insights::error::{AnalyzerError, AnalyzerResult};
use channel_insights::models::CatalogEntry;
use channel_insights::services::youtube::{
    ChannelDetails, PlaylistPage, VideoPlatform, VideoStatistics,
};
use std::collections::HashMap;
use std::sync::Mutex;

pub const CHANNEL_ID: &str = "UC_test_channel";
pub const UPLOADS_ID: &str = "UU_test_channel";

/// In-memory platform with one channel. Page tokens are item offsets.
#[derive(Default)]
pub struct FakePlatform {
    pub channels: HashMap<String, ChannelDetails>,
    pub uploads: Vec<CatalogEntry>,
    pub views: HashMap<String, Option<u64>>,
    pub reverse_statistics: bool,
    pub statistics_error: Option<AnalyzerError>,
    pub playlist_error: Option<AnalyzerError>,
    /// Answer every playlist request with no items but a next page token.
    pub stalled_paging: bool,
    pub page_requests: Mutex<Vec<(usize, Option<String>)>>,
    pub statistics_requests: Mutex<Vec<Vec<String>>>,
}

impl FakePlatform {
    pub fn with_videos(videos: &[(&str, &str, u64)]) -> Self {
        let mut platform = FakePlatform::default();
        platform.channels.insert(
            CHANNEL_ID.to_string(),
            ChannelDetails {
                channel_id: CHANNEL_ID.to_string(),
                uploads_playlist_id: Some(UPLOADS_ID.to_string()),
            },
        );
        for (i, (title, description, views)) in videos.iter().enumerate() {
            let video_id = format!("vid{i:03}");
            platform.uploads.push(CatalogEntry {
                video_id: video_id.clone(),
                title: title.to_string(),
                description: description.to_string(),
            });
            platform.views.insert(video_id, Some(*views));
        }
        platform
    }

    pub fn with_video_count(count: usize) -> Self {
        let titles: Vec<String> = (0..count).map(|i| format!("Video {i}")).collect();
        let videos: Vec<(&str, &str, u64)> = titles
            .iter()
            .enumerate()
            .map(|(i, title)| (title.as_str(), "", i as u64 * 10))
            .collect();
        Self::with_videos(&videos)
    }

    pub fn page_sizes(&self) -> Vec<usize> {
        self.page_requests
            .lock()
            .unwrap()
            .iter()
            .map(|(size, _)| *size)
            .collect()
    }

    pub fn batch_sizes(&self) -> Vec<usize> {
        self.statistics_requests
            .lock()
            .unwrap()
            .iter()
            .map(Vec::len)
            .collect()
    }
}

#[async_trait]
impl VideoPlatform for FakePlatform {
    async fn lookup_channels(&self, channel_id: &str) -> AnalyzerResult<Vec<ChannelDetails>> {
        Ok(self.channels.get(channel_id).cloned().into_iter().collect())
    }

    async fn playlist_page(
        &self,
        playlist_id: &str,
        page_size: usize,
        page_token: Option<&str>,
    ) -> AnalyzerResult<PlaylistPage> {
        self.page_requests
            .lock()
            .unwrap()
            .push((page_size, page_token.map(String::from)));

        if let Some(err) = &self.playlist_error {
            return Err(err.clone());
        }
        if playlist_id != UPLOADS_ID {
            return Err(AnalyzerError::Upstream("playlistNotFound".to_string()));
        }
        if self.stalled_paging {
            return Ok(PlaylistPage {
                items: Vec::new(),
                next_page_token: Some("stalled".to_string()),
            });
        }

        let start: usize = page_token.map_or(0, |t| t.parse().unwrap());
        let end = (start + page_size).min(self.uploads.len());
        Ok(PlaylistPage {
            items: self.uploads[start..end].to_vec(),
            next_page_token: (end < self.uploads.len()).then(|| end.to_string()),
        })
    }

    async fn video_statistics(&self, video_ids: &[String]) -> AnalyzerResult<Vec<VideoStatistics>> {
        self.statistics_requests
            .lock()
            .unwrap()
            .push(video_ids.to_vec());

        if let Some(err) = &self.statistics_error {
            return Err(err.clone());
        }

        let mut stats: Vec<VideoStatistics> = video_ids
            .iter()
            .filter_map(|id| {
                self.views.get(id).map(|views| VideoStatistics {
                    video_id: id.clone(),
                    view_count: *views,
                })
            })
            .collect();
        if self.reverse_statistics {
            stats.reverse();
        }
        Ok(stats)
    }
}
