use serde::{Deserialize, Serialize};
use std::fmt;

/// A playlist entry before its statistics are known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub video_id: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub views: u64,
}

impl VideoRecord {
    pub fn from_entry(entry: CatalogEntry, views: u64) -> Self {
        VideoRecord {
            video_id: entry.video_id,
            title: entry.title,
            description: entry.description,
            views,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "Tutoriais")]
    Tutorials,
    #[serde(rename = "Vlogs")]
    Vlogs,
    #[serde(rename = "Notícias")]
    News,
    #[serde(rename = "Reviews")]
    Reviews,
    #[serde(rename = "Curiosidades")]
    Trivia,
    #[serde(rename = "Outro")]
    Other,
}

impl Topic {
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Tutorials => "Tutoriais",
            Topic::Vlogs => "Vlogs",
            Topic::News => "Notícias",
            Topic::Reviews => "Reviews",
            Topic::Trivia => "Curiosidades",
            Topic::Other => "Outro",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub topic: Topic,
    pub video_count: usize,
    pub mean_views: u64,
    /// "k/n": k videos above the global median out of the n in this topic.
    pub success_rate: String,
    pub representative_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub topic: Topic,
    pub video_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelReport {
    pub channel_id: String,
    pub total_videos: usize,
    pub mean_views: u64,
    pub median_views: u64,
    pub topics: Vec<TopicSummary>,
    pub chart: Vec<ChartPoint>,
    pub generated_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
