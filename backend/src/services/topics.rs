use crate::error::{AnalyzerError, AnalyzerResult};
use crate::models::{Topic, TopicSummary, VideoRecord};
use std::fmt;
use std::str::FromStr;

type Rule = (Topic, &'static [&'static str]);

// Tested top to bottom, first hit wins. Order is part of the behaviour.
const ENGLISH_RULES: &[Rule] = &[
    (Topic::Tutorials, &["tutorial", "how-to", "how to", "step by step"]),
    (Topic::Vlogs, &["vlog", "my routine", "daily routine", "day in the life"]),
    (Topic::News, &["news", "update", "latest"]),
    (Topic::Reviews, &["review", "analysis", "opinion"]),
    (Topic::Trivia, &["trivia", "facts"]),
];

const PORTUGUESE_RULES: &[Rule] = &[
    (Topic::Tutorials, &["tutorial", "como fazer", "passo a passo"]),
    (Topic::Vlogs, &["vlog", "minha rotina", "dia"]),
    (Topic::News, &["notícia", "atualização", "últimas"]),
    (Topic::Reviews, &["review", "análise", "opinião"]),
    (Topic::Trivia, &["curiosidades", "fatos"]),
];

/// Language of the keyword table. Topic labels are the same for every locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordLocale {
    #[default]
    English,
    Portuguese,
}

impl FromStr for KeywordLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(KeywordLocale::English),
            "pt" | "pt-br" | "portuguese" => Ok(KeywordLocale::Portuguese),
            other => Err(format!("unknown locale '{other}', expected 'en' or 'pt'")),
        }
    }
}

impl fmt::Display for KeywordLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeywordLocale::English => f.write_str("en"),
            KeywordLocale::Portuguese => f.write_str("pt"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TopicClassifier {
    rules: &'static [Rule],
}

impl Default for TopicClassifier {
    fn default() -> Self {
        Self::new(KeywordLocale::default())
    }
}

impl TopicClassifier {
    pub fn new(locale: KeywordLocale) -> Self {
        let rules = match locale {
            KeywordLocale::English => ENGLISH_RULES,
            KeywordLocale::Portuguese => PORTUGUESE_RULES,
        };
        Self { rules }
    }

    pub fn classify(&self, title: &str, description: &str) -> Topic {
        let text = format!("{title} {description}").to_lowercase();

        self.rules
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
            .map(|(topic, _)| *topic)
            .unwrap_or(Topic::Other)
    }
}

/// Classifies with the default (English) keyword table.
pub fn classify(title: &str, description: &str) -> Topic {
    TopicClassifier::default().classify(title, description)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicAggregation {
    pub summaries: Vec<TopicSummary>,
    pub global_mean: u64,
    pub global_median: u64,
}

/// Integer-truncated mean, `None` for an empty slice.
pub fn mean_views(views: &[u64]) -> Option<u64> {
    if views.is_empty() {
        return None;
    }
    let total: u128 = views.iter().map(|&v| u128::from(v)).sum();
    Some((total / views.len() as u128) as u64)
}

/// Median with the two middle values averaged for even lengths.
pub fn median_views(views: &[u64]) -> Option<f64> {
    if views.is_empty() {
        return None;
    }
    let mut sorted = views.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0)
    } else {
        Some(sorted[mid] as f64)
    }
}

/// Partitions `records` by topic and summarises each partition.
///
/// The global mean and median are computed over all records before grouping;
/// a video counts as a success when its views are strictly above the global
/// median. Rows come out in order of each topic's first appearance.
pub fn aggregate(
    records: &[VideoRecord],
    classifier: &TopicClassifier,
) -> AnalyzerResult<TopicAggregation> {
    let views: Vec<u64> = records.iter().map(|r| r.views).collect();
    let (global_mean, median) = match (mean_views(&views), median_views(&views)) {
        (Some(mean), Some(median)) => (mean, median),
        _ => return Err(AnalyzerError::EmptyInput),
    };

    let mut partitions: Vec<(Topic, Vec<&VideoRecord>)> = Vec::new();
    for record in records {
        let topic = classifier.classify(&record.title, &record.description);
        match partitions.iter_mut().find(|(t, _)| *t == topic) {
            Some((_, members)) => members.push(record),
            None => partitions.push((topic, vec![record])),
        }
    }

    let summaries = partitions
        .into_iter()
        .map(|(topic, members)| summarize(topic, &members, median))
        .collect();

    Ok(TopicAggregation {
        summaries,
        global_mean,
        global_median: median as u64,
    })
}

fn summarize(topic: Topic, members: &[&VideoRecord], global_median: f64) -> TopicSummary {
    let views: Vec<u64> = members.iter().map(|r| r.views).collect();
    let successes = members
        .iter()
        .filter(|r| r.views as f64 > global_median)
        .count();

    // Strictly greater keeps the earliest record on ties.
    let representative_title = members
        .iter()
        .copied()
        .reduce(|best, r| if r.views > best.views { r } else { best })
        .map(|r| r.title.clone())
        .unwrap_or_default();

    TopicSummary {
        topic,
        video_count: members.len(),
        mean_views: mean_views(&views).unwrap_or(0),
        success_rate: format!("{}/{}", successes, members.len()),
        representative_title,
    }
}
