use crate::models::{
    CategoryBreakdown, ChannelRanking, EngagementRow, ErrorResponse, StatsSummary, TrendingIngest,
    TrendingVideo, YoutuberRanking,
};
use gloo_net::http::Request;
use serde::de::{DeserializeOwned, IgnoredAny};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{0}")]
    Application(String),
    #[error("HTTP {0}")]
    Http(u16),
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    FetchTrending,
    Stats,
    TopYoutubers,
    TopTrendingVideos,
    TopChannels,
    PopularCategories,
    ViewsLikesAnalysis,
    ResetDb,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::FetchTrending => "/fetch-trending",
            Endpoint::Stats => "/stats",
            Endpoint::TopYoutubers => "/top-indian-youtubers",
            Endpoint::TopTrendingVideos => "/top-trending-videos",
            Endpoint::TopChannels => "/top-channels",
            Endpoint::PopularCategories => "/popular-categories",
            Endpoint::ViewsLikesAnalysis => "/views-likes-analysis",
            Endpoint::ResetDb => "/reset-db",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Endpoint::FetchTrending | Endpoint::ResetDb => Method::Post,
            _ => Method::Get,
        }
    }
}

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, endpoint: Endpoint) -> Result<RawResponse, ApiError>;
}

/// Browser transport backed by `fetch`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpTransport {
    api_base: String,
}

impl HttpTransport {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }
}

impl Transport for HttpTransport {
    async fn send(&self, endpoint: Endpoint) -> Result<RawResponse, ApiError> {
        let url = format!("{}{}", self.api_base, endpoint.path());
        let request = match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        log::debug!("{} -> HTTP {}", url, status);
        Ok(RawResponse { status, body })
    }
}

pub fn decode_body<T: DeserializeOwned>(response: &RawResponse) -> Result<T, ApiError> {
    if let Ok(failure) = serde_json::from_str::<ErrorResponse>(&response.body) {
        return Err(ApiError::Application(failure.error));
    }
    if !response.ok() {
        return Err(ApiError::Http(response.status));
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Typed access to the analytics endpoints.
#[derive(Debug, Clone)]
pub struct AnalyticsClient<T> {
    transport: T,
}

impl<T: Transport> AnalyticsClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn fetch<R: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<R, ApiError> {
        let response = self.transport.send(endpoint).await?;
        decode_body(&response)
    }

    pub async fn stats(&self) -> Result<StatsSummary, ApiError> {
        self.fetch(Endpoint::Stats).await
    }

    pub async fn top_youtubers(&self) -> Result<Vec<YoutuberRanking>, ApiError> {
        self.fetch(Endpoint::TopYoutubers).await
    }

    pub async fn top_trending_videos(&self) -> Result<Vec<TrendingVideo>, ApiError> {
        self.fetch(Endpoint::TopTrendingVideos).await
    }

    pub async fn top_channels(&self) -> Result<Vec<ChannelRanking>, ApiError> {
        self.fetch(Endpoint::TopChannels).await
    }

    pub async fn popular_categories(&self) -> Result<Vec<CategoryBreakdown>, ApiError> {
        self.fetch(Endpoint::PopularCategories).await
    }

    pub async fn views_likes_analysis(&self) -> Result<Vec<EngagementRow>, ApiError> {
        self.fetch(Endpoint::ViewsLikesAnalysis).await
    }

    pub async fn fetch_trending(&self) -> Result<TrendingIngest, ApiError> {
        self.fetch(Endpoint::FetchTrending).await
    }

    pub async fn reset_db(&self) -> Result<(), ApiError> {
        let response = self.transport.send(Endpoint::ResetDb).await?;
        // Only an explicit failure counts; the success body carries nothing.
        match decode_body::<IgnoredAny>(&response) {
            Err(ApiError::Parse(_)) | Ok(_) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn endpoints_map_to_backend_routes() {
        assert_eq!(Endpoint::TopYoutubers.path(), "/top-indian-youtubers");
        assert_eq!(Endpoint::FetchTrending.method(), Method::Post);
        assert_eq!(Endpoint::ResetDb.method(), Method::Post);
        assert_eq!(Endpoint::Stats.method(), Method::Get);
    }

    #[test]
    fn decodes_successful_body() {
        let ingest: TrendingIngest =
            decode_body(&response(200, r#"{"success":true,"inserted":7}"#)).unwrap();
        assert_eq!(ingest.inserted, 7);
    }

    #[test]
    fn error_payload_becomes_application_error() {
        let result = decode_body::<TrendingIngest>(&response(500, r#"{"error":"quota exceeded"}"#));
        assert_eq!(result, Err(ApiError::Application("quota exceeded".into())));
    }

    #[test]
    fn error_payload_wins_even_with_success_status() {
        let result = decode_body::<Vec<ChannelRanking>>(&response(200, r#"{"error":"x"}"#));
        assert_eq!(result, Err(ApiError::Application("x".into())));
    }

    #[test]
    fn bare_http_failure_reports_status() {
        let result = decode_body::<StatsSummary>(&response(502, "<html>Bad Gateway</html>"));
        assert_eq!(result, Err(ApiError::Http(502)));
    }

    #[test]
    fn non_json_success_is_a_parse_failure() {
        let result = decode_body::<StatsSummary>(&response(200, "not json"));
        assert!(matches!(result, Err(ApiError::Parse(_))));
    }
}
