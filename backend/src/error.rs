use crate::models::ErrorResponse;
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;

/// Every failure a report run can end with. All of them are terminal for the run.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    /// Missing credential, blank channel id or an unusable setting.
    #[error("{0}")]
    Configuration(String),

    #[error("channel '{0}' was not found")]
    NotFound(String),

    /// Quota, network or malformed-response failures from the YouTube Data API.
    #[error("YouTube API error: {0}")]
    Upstream(String),

    #[error("no videos found for this channel")]
    EmptyInput,
}

impl AnalyzerError {
    pub fn kind(&self) -> &'static str {
        match self {
            AnalyzerError::Configuration(_) => "configuration",
            AnalyzerError::NotFound(_) => "not_found",
            AnalyzerError::Upstream(_) => "upstream",
            AnalyzerError::EmptyInput => "empty_input",
        }
    }

    pub fn status(&self) -> Status {
        match self {
            AnalyzerError::Configuration(_) => Status::BadRequest,
            AnalyzerError::NotFound(_) => Status::NotFound,
            AnalyzerError::Upstream(_) => Status::BadGateway,
            AnalyzerError::EmptyInput => Status::UnprocessableEntity,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        }
    }
}

// The request URL carries the API key; it must never reach a message.
impl From<reqwest::Error> for AnalyzerError {
    fn from(e: reqwest::Error) -> Self {
        AnalyzerError::Upstream(e.without_url().to_string())
    }
}

impl<'r> Responder<'r, 'static> for AnalyzerError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status(), Json(self.to_response())).respond_to(request)
    }
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
