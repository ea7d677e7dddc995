/// Jikan API client
///
/// Consumes one endpoint of the public Jikan (MyAnimeList) REST API: the
/// site-wide anime recommendation feed. Each call is a single attempt with
/// no retry, no backoff, and no configured timeout; every failure is
/// terminal for the page load that triggered it.
use reqwest::{Client as HttpClient, StatusCode};

use crate::{
    error::{AppError, AppResult},
    models::{RecommendationRecord, RecommendationsResponse},
};

#[derive(Clone)]
pub struct JikanClient {
    http_client: HttpClient,
    base_url: String,
}

impl JikanClient {
    /// Creates a client against the given API base URL
    /// (e.g. `https://api.jikan.moe/v4`).
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
        }
    }

    /// Fetches the current anime recommendation pairs.
    ///
    /// Failure taxonomy, in the order checked: transport failure, HTTP 429,
    /// any other non-success status, unparseable body, empty `data` array.
    /// 429 is tested before the generic status check so the rate-limit
    /// message is reachable.
    pub async fn fetch_recommendations(&self) -> AppResult<Vec<RecommendationRecord>> {
        let url = format!("{}/recommendations/anime", self.base_url);

        let response = match self.http_client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, url = %url, "Recommendations request failed");
                return Err(AppError::Http(e));
            }
        };

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!(url = %url, "Jikan rate limit hit");
            return Err(AppError::RateLimited);
        }

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = %status, url = %url, "Jikan returned non-success status");
            return Err(AppError::UpstreamStatus(status.as_u16()));
        }

        // Read text first so a malformed body is distinguishable from a
        // transport failure.
        let body = response.text().await?;
        let parsed: RecommendationsResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(error = %e, "Failed to parse recommendations response");
            AppError::Parse(e)
        })?;

        if parsed.data.is_empty() {
            tracing::warn!(url = %url, "Recommendations feed came back empty");
            return Err(AppError::NoRecommendations);
        }

        tracing::info!(count = parsed.data.len(), "Recommendations fetched");
        Ok(parsed.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn pair(a: u64, b: u64) -> serde_json::Value {
        json!({
            "entry": [
                {
                    "mal_id": a,
                    "title": format!("Anime {a}"),
                    "images": { "jpg": { "image_url": format!("https://cdn.example/{a}.jpg") } }
                },
                {
                    "mal_id": b,
                    "title": format!("Anime {b}"),
                    "images": { "jpg": { "image_url": format!("https://cdn.example/{b}.jpg") } }
                }
            ]
        })
    }

    // Returns the server alongside the client: the mock shuts down on drop.
    async fn mock_feed(response: ResponseTemplate) -> (MockServer, JikanClient) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recommendations/anime"))
            .respond_with(response)
            .mount(&server)
            .await;
        let client = JikanClient::new(server.uri());
        (server, client)
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let body = json!({ "data": [pair(1, 2), pair(3, 4)] });
        let (_server, client) = mock_feed(ResponseTemplate::new(200).set_body_json(body)).await;

        let records = client.fetch_recommendations().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].lead().mal_id, 1);
        assert_eq!(records[1].followup().mal_id, 4);
    }

    #[tokio::test]
    async fn test_rate_limit_checked_before_generic_status() {
        let (_server, client) = mock_feed(ResponseTemplate::new(429)).await;
        let err = client.fetch_recommendations().await.unwrap_err();
        assert!(matches!(err, AppError::RateLimited));
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let (_server, client) = mock_feed(ResponseTemplate::new(503)).await;
        let err = client.fetch_recommendations().await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamStatus(503)));
    }

    #[tokio::test]
    async fn test_empty_feed() {
        let body = json!({ "data": [] });
        let (_server, client) = mock_feed(ResponseTemplate::new(200).set_body_json(body)).await;
        let err = client.fetch_recommendations().await.unwrap_err();
        assert!(matches!(err, AppError::NoRecommendations));
    }

    #[tokio::test]
    async fn test_missing_data_key_treated_as_empty() {
        let (_server, client) = mock_feed(ResponseTemplate::new(200).set_body_json(json!({}))).await;
        let err = client.fetch_recommendations().await.unwrap_err();
        assert!(matches!(err, AppError::NoRecommendations));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let (_server, client) = mock_feed(ResponseTemplate::new(200).set_body_string("not json")).await;
        let err = client.fetch_recommendations().await.unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[tokio::test]
    async fn test_transport_failure() {
        // Nothing listens on the discard port.
        let client = JikanClient::new("http://127.0.0.1:9".to_string());
        let err = client.fetch_recommendations().await.unwrap_err();
        assert!(matches!(err, AppError::Http(_)));
    }
}
