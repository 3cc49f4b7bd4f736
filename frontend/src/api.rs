use crate::env_variable_utils::BACKEND_URL;
use crate::models::{ChannelReport, ErrorResponse};
use gloo_net::http::Request;
use yew::prelude::*;

pub async fn fetch_report(
    channel_id: String,
    report: UseStateHandle<Option<ChannelReport>>,
    error_message: UseStateHandle<Option<String>>,
    loading: UseStateHandle<bool>,
) {
    let url = format!(
        "{}/report/{}",
        &*BACKEND_URL,
        urlencoding::encode(channel_id.trim())
    );

    match Request::get(&url).send().await {
        Ok(response) => {
            if response.ok() {
                match response.json::<ChannelReport>().await {
                    Ok(channel_report) => {
                        report.set(Some(channel_report));
                        error_message.set(None);
                    }
                    Err(e) => handle_error(&error_message, format!("Failed to parse report: {e}")),
                }
            } else {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                // The backend answers with {error, message}; fall back to the raw body.
                let message = match serde_json::from_str::<ErrorResponse>(&text) {
                    Ok(error_response) => error_response.message,
                    Err(_) => format!("Report failed ({status}): {text}"),
                };
                report.set(None);
                handle_error(&error_message, message);
            }
        }
        Err(e) => handle_error(&error_message, format!("Failed to connect to backend: {e}")),
    }

    loading.set(false);
}

fn handle_error(error_message: &UseStateHandle<Option<String>>, error: String) {
    error_message.set(Some(error.clone()));
    web_sys::console::error_1(&error.into());
}
