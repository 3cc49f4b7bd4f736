use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub topic: String,
    pub video_count: usize,
    pub mean_views: u64,
    pub success_rate: String,
    pub representative_title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub topic: String,
    pub video_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelReport {
    pub channel_id: String,
    pub total_videos: usize,
    pub mean_views: u64,
    pub median_views: u64,
    pub topics: Vec<TopicSummary>,
    pub chart: Vec<ChartPoint>,
    pub generated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
