use axum::response::{Html, IntoResponse, Response};

use crate::render;

/// Application-level errors
///
/// Every variant is terminal for the current page load: the user sees an
/// inline message in place of the grid and nothing is retried. A reload
/// issues a fresh fetch.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Rate limit reached. Please wait a few seconds and try again.")]
    RateLimited,

    #[error("Error fetching data: recommendations endpoint returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("No recommendations found.")]
    NoRecommendations,

    #[error("Error fetching data: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Error parsing response data")]
    Parse(#[from] serde_json::Error),
}

impl AppError {
    /// An empty feed is a warning; everything else is an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, AppError::NoRecommendations)
    }
}

impl IntoResponse for AppError {
    /// Failures surface as an inline message on an otherwise normal page, so
    /// handlers can bail with `?` and the user still gets the full chrome.
    /// The page stays HTTP 200: the page itself rendered fine, the feed
    /// behind it did not.
    fn into_response(self) -> Response {
        let severity = if self.is_warning() {
            render::Severity::Warning
        } else {
            render::Severity::Error
        };

        Html(render::page(&render::message(severity, &self.to_string()))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_message() {
        assert_eq!(
            AppError::RateLimited.to_string(),
            "Rate limit reached. Please wait a few seconds and try again."
        );
    }

    #[test]
    fn test_empty_feed_is_warning() {
        assert!(AppError::NoRecommendations.is_warning());
        assert!(!AppError::RateLimited.is_warning());
        assert!(!AppError::UpstreamStatus(500).is_warning());
    }
}
