use channel_insights::config::{create_platform, init_logger, load_environment, Settings};
use channel_insights::error::AnalyzerError;
use channel_insights::models::ChannelReport;
use channel_insights::presentation::render_report;
use channel_insights::services::report::{analyze_channel, AnalysisOptions};
use clap::Parser;
use log::error;
use std::process::ExitCode;

/// Topic statistics for the latest uploads of a YouTube channel.
#[derive(Parser, Debug)]
#[command(name = "channel-report", version)]
struct Args {
    /// Channel ID (UC...), not the channel URL
    channel_id: Option<String>,

    /// Maximum number of recent videos to analyze [default: MAX_VIDEOS or 100]
    #[arg(short, long)]
    max_videos: Option<usize>,

    /// Keyword language for topic matching: en or pt [default: TOPIC_LOCALE or en]
    #[arg(short, long)]
    locale: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    load_environment();
    init_logger();
    let args = Args::parse();

    match run(&args).await {
        Ok(report) if args.json => match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: failed to encode report: {e}");
                ExitCode::FAILURE
            }
        },
        Ok(report) => {
            println!("{}", render_report(&report));
            ExitCode::SUCCESS
        }
        Err(AnalyzerError::Configuration(prompt)) => {
            println!("{prompt}");
            if args.channel_id.as_deref().map_or(true, |id| id.trim().is_empty()) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            error!("Report failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<ChannelReport, AnalyzerError> {
    let channel_id = match args.channel_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id,
        _ => {
            return Err(AnalyzerError::Configuration(
                "Enter a channel ID (not the channel URL) to get started.".to_string(),
            ))
        }
    };

    let settings = Settings::from_env()?;
    let mut options = AnalysisOptions::from(&settings);
    if let Some(max) = args.max_videos {
        options.max_videos = max;
    }
    if let Some(locale) = &args.locale {
        options.locale = locale.parse().map_err(AnalyzerError::Configuration)?;
    }

    let platform = create_platform(&settings)?;
    analyze_channel(platform.as_ref(), channel_id, &options).await
}
