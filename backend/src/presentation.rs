use crate::models::ChannelReport;
use std::fmt::Write;

const BAR_WIDTH: usize = 40;

// Formats each x1000 step
pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Plain-text report: summary numbers, topic table and a bar chart of videos per topic.
pub fn render_report(report: &ChannelReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Channel {}", report.channel_id);
    let _ = writeln!(out, "Videos analyzed: {}", report.total_videos);
    let _ = writeln!(out, "Mean views:      {}", format_number(report.mean_views));
    let _ = writeln!(out, "Median views:    {}", format_number(report.median_views));
    out.push('\n');

    let _ = writeln!(
        out,
        "{:<14} {:>6} {:>12} {:>8}  {}",
        "Topic", "Videos", "Mean views", "Success", "Representative video"
    );
    for row in &report.topics {
        let _ = writeln!(
            out,
            "{:<14} {:>6} {:>12} {:>8}  {}",
            row.topic.label(),
            row.video_count,
            format_number(row.mean_views),
            row.success_rate,
            row.representative_title
        );
    }
    out.push('\n');

    let _ = writeln!(out, "Videos per topic");
    let max = report.chart.iter().map(|p| p.video_count).max().unwrap_or(0);
    for point in &report.chart {
        let _ = writeln!(
            out,
            "{:<14} | {} {}",
            point.topic.label(),
            bar(point.video_count, max),
            point.video_count
        );
    }

    out
}

fn bar(value: usize, max: usize) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }
    let len = (value * BAR_WIDTH / max).max(1);
    "█".repeat(len)
}
