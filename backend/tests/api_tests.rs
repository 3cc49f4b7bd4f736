mod support;

use channel_insights::config::Settings;
use channel_insights::error::AnalyzerError;
use channel_insights::models::{ChannelReport, ErrorResponse, Topic};
use channel_insights::services::youtube::VideoPlatform;
use channel_insights::{build_rocket, AppState};
use rocket::http::Status;
use rocket::local::asynchronous::Client;
use std::sync::Arc;
use support::{FakePlatform, CHANNEL_ID};

async fn client_for(platform: Option<FakePlatform>) -> Client {
    client_with(Settings::default(), platform).await
}

async fn client_with(settings: Settings, platform: Option<FakePlatform>) -> Client {
    let state = AppState {
        settings,
        platform: platform.map(|p| Arc::new(p) as Arc<dyn VideoPlatform>),
    };
    let rocket = build_rocket(state).expect("valid rocket");
    Client::tracked(rocket).await.expect("valid client")
}

fn sample_platform() -> FakePlatform {
    FakePlatform::with_videos(&[
        ("Step by step tutorial", "", 300),
        ("Latest news", "", 100),
        ("Another tutorial", "", 20),
    ])
}

#[rocket::async_test]
async fn test_report_returns_topic_statistics() {
    let client = client_for(Some(sample_platform())).await;

    let response = client.get(format!("/report/{CHANNEL_ID}")).dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let report: ChannelReport = response.into_json().await.expect("report body");
    assert_eq!(report.total_videos, 3);
    assert_eq!(report.mean_views, 140);
    assert_eq!(report.median_views, 100);
    assert_eq!(report.topics[0].topic, Topic::Tutorials);
    assert_eq!(report.topics[0].video_count, 2);
    assert_eq!(report.topics[0].mean_views, 160);
    assert_eq!(report.topics[0].success_rate, "1/2");
    assert_eq!(report.topics[0].representative_title, "Step by step tutorial");
    assert_eq!(report.topics[1].topic, Topic::News);
    assert_eq!(report.topics[1].success_rate, "0/1");
}

#[rocket::async_test]
async fn test_report_honours_max_query() {
    let client = client_for(Some(sample_platform())).await;

    let response = client
        .get(format!("/report/{CHANNEL_ID}?max=1"))
        .dispatch()
        .await;
    let report: ChannelReport = response.into_json().await.expect("report body");
    assert_eq!(report.total_videos, 1);
}

#[rocket::async_test]
async fn test_max_query_cannot_exceed_configured_limit() {
    let settings = Settings {
        max_videos: 2,
        ..Settings::default()
    };
    let client = client_with(settings, Some(sample_platform())).await;

    let response = client
        .get(format!("/report/{CHANNEL_ID}?max=500"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let report: ChannelReport = response.into_json().await.expect("report body");
    assert_eq!(report.total_videos, 2);
}

#[rocket::async_test]
async fn test_unknown_channel_is_404() {
    let client = client_for(Some(sample_platform())).await;

    let response = client.get("/report/UC_nobody").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);

    let body: ErrorResponse = response.into_json().await.expect("error body");
    assert_eq!(body.error, "not_found");
    assert!(body.message.contains("UC_nobody"));
}

#[rocket::async_test]
async fn test_missing_channel_id_is_a_prompt() {
    let client = client_for(Some(sample_platform())).await;

    let response = client.get("/report").dispatch().await;
    assert_eq!(response.status(), Status::BadRequest);
    let body: ErrorResponse = response.into_json().await.expect("error body");
    assert_eq!(body.error, "configuration");
}

#[rocket::async_test]
async fn test_missing_api_key_is_a_prompt() {
    let client = client_for(None).await;

    let response = client.get(format!("/report/{CHANNEL_ID}")).dispatch().await;
    assert_eq!(response.status(), Status::BadRequest);
    let body: ErrorResponse = response.into_json().await.expect("error body");
    assert!(body.message.contains("YOUTUBE_API_KEY"));
}

#[rocket::async_test]
async fn test_unknown_locale_is_rejected() {
    let client = client_for(Some(sample_platform())).await;

    let response = client
        .get(format!("/report/{CHANNEL_ID}?locale=fr"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
}

#[rocket::async_test]
async fn test_upstream_failure_is_502() {
    let mut platform = sample_platform();
    platform.statistics_error = Some(AnalyzerError::Upstream("quotaExceeded".to_string()));
    let client = client_for(Some(platform)).await;

    let response = client.get(format!("/report/{CHANNEL_ID}")).dispatch().await;
    assert_eq!(response.status(), Status::BadGateway);
    let body: ErrorResponse = response.into_json().await.expect("error body");
    assert_eq!(body.message, "YouTube API error: quotaExceeded");
}

#[rocket::async_test]
async fn test_empty_channel_is_422() {
    let client = client_for(Some(FakePlatform::with_video_count(0))).await;

    let response = client.get(format!("/report/{CHANNEL_ID}")).dispatch().await;
    assert_eq!(response.status(), Status::UnprocessableEntity);
    let body: ErrorResponse = response.into_json().await.expect("error body");
    assert_eq!(body.error, "empty_input");
}
