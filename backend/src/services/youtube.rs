use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::CatalogEntry;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Largest `maxResults` / id batch the Data API accepts in one request.
pub const MAX_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelDetails {
    pub channel_id: String,
    pub uploads_playlist_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistPage {
    pub items: Vec<CatalogEntry>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoStatistics {
    pub video_id: String,
    pub view_count: Option<u64>,
}

/// The three read-only lookups the analyzer needs from the video platform.
#[async_trait]
pub trait VideoPlatform: Send + Sync {
    async fn lookup_channels(&self, channel_id: &str) -> AnalyzerResult<Vec<ChannelDetails>>;

    async fn playlist_page(
        &self,
        playlist_id: &str,
        page_size: usize,
        page_token: Option<&str>,
    ) -> AnalyzerResult<PlaylistPage>;

    /// `video_ids` holds at most [`MAX_PAGE_SIZE`] ids.
    async fn video_statistics(&self, video_ids: &[String]) -> AnalyzerResult<Vec<VideoStatistics>>;
}

pub struct YouTubeDataApi {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeDataApi {
    pub fn new(api_key: String, base_url: &str, timeout_secs: u64) -> AnalyzerResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AnalyzerError::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, resource: &str, params: &[(&str, &str)]) -> AnalyzerResult<Url> {
        let mut query = params.to_vec();
        query.push(("key", self.api_key.as_str()));

        Url::parse_with_params(&format!("{}/{}", self.base_url, resource), &query)
            .map_err(|e| AnalyzerError::Configuration(format!("Invalid API URL: {e}")))
    }

    async fn get_json(&self, url: Url) -> AnalyzerResult<Value> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| body["error"]["message"].as_str().map(String::from))
                .unwrap_or(text);
            return Err(AnalyzerError::Upstream(format!("HTTP {status} - {message}")));
        }

        serde_json::from_str(&text)
            .map_err(|e| AnalyzerError::Upstream(format!("Invalid JSON response: {e}")))
    }
}

#[async_trait]
impl VideoPlatform for YouTubeDataApi {
    // https://developers.google.com/youtube/v3/docs/channels/list
    async fn lookup_channels(&self, channel_id: &str) -> AnalyzerResult<Vec<ChannelDetails>> {
        debug!("channels.list id={channel_id}");
        let url = self.endpoint("channels", &[("part", "contentDetails"), ("id", channel_id)])?;
        Ok(parse_channels(&self.get_json(url).await?))
    }

    // https://developers.google.com/youtube/v3/docs/playlistItems/list
    async fn playlist_page(
        &self,
        playlist_id: &str,
        page_size: usize,
        page_token: Option<&str>,
    ) -> AnalyzerResult<PlaylistPage> {
        debug!("playlistItems.list playlistId={playlist_id} maxResults={page_size}");
        let max_results = page_size.to_string();
        let mut params = vec![
            ("part", "snippet"),
            ("playlistId", playlist_id),
            ("maxResults", max_results.as_str()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let url = self.endpoint("playlistItems", &params)?;
        parse_playlist_page(&self.get_json(url).await?)
    }

    // https://developers.google.com/youtube/v3/docs/videos/list
    async fn video_statistics(&self, video_ids: &[String]) -> AnalyzerResult<Vec<VideoStatistics>> {
        debug!("videos.list with {} ids", video_ids.len());
        let ids = video_ids.join(",");
        let url = self.endpoint("videos", &[("part", "statistics"), ("id", ids.as_str())])?;
        parse_statistics(&self.get_json(url).await?)
    }
}

fn items(response: &Value) -> &[Value] {
    response["items"].as_array().map(Vec::as_slice).unwrap_or(&[])
}

pub(crate) fn parse_channels(response: &Value) -> Vec<ChannelDetails> {
    items(response)
        .iter()
        .map(|item| ChannelDetails {
            channel_id: item["id"].as_str().unwrap_or("").to_string(),
            uploads_playlist_id: item["contentDetails"]["relatedPlaylists"]["uploads"]
                .as_str()
                .map(String::from),
        })
        .collect()
}

pub(crate) fn parse_playlist_page(response: &Value) -> AnalyzerResult<PlaylistPage> {
    let mut entries = Vec::new();

    for item in items(response) {
        let snippet = &item["snippet"];
        let video_id = snippet["resourceId"]["videoId"].as_str().ok_or_else(|| {
            AnalyzerError::Upstream("playlist item without a video id".to_string())
        })?;

        entries.push(CatalogEntry {
            video_id: video_id.to_string(),
            title: snippet["title"].as_str().unwrap_or("").to_string(),
            description: snippet["description"].as_str().unwrap_or("").to_string(),
        });
    }

    Ok(PlaylistPage {
        items: entries,
        next_page_token: response["nextPageToken"]
            .as_str()
            .filter(|token| !token.is_empty())
            .map(String::from),
    })
}

pub(crate) fn parse_statistics(response: &Value) -> AnalyzerResult<Vec<VideoStatistics>> {
    items(response)
        .iter()
        .map(|item| {
            let video_id = item["id"]
                .as_str()
                .ok_or_else(|| AnalyzerError::Upstream("video without an id".to_string()))?;

            // viewCount is a decimal string; hidden counts omit the field.
            let view_count = match &item["statistics"]["viewCount"] {
                Value::String(raw) => Some(raw.parse::<u64>().map_err(|e| {
                    AnalyzerError::Upstream(format!("bad viewCount '{raw}' for {video_id}: {e}"))
                })?),
                Value::Number(n) => n.as_u64(),
                _ => None,
            };

            Ok(VideoStatistics {
                video_id: video_id.to_string(),
                view_count,
            })
        })
        .collect()
}
