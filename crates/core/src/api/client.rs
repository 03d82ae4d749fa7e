use crate::api::ApiError;
use crate::config::Settings;
use crate::domain::{AdviceOutput, Notation, NotationStats, RawInput};
use crate::time::format_ymd;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_LOGGED_BODY_CHARS: usize = 300;

pub const DEFAULT_STATS_WINDOW_DAYS: u32 = 30;
pub const DEFAULT_INPUT_LIMIT: usize = 50;
pub const DEFAULT_ADVICE_LIMIT: usize = 10;

/// Retrieval surface of the well-being backend. Every operation is a
/// side-effect-free GET; failures are returned to the caller once, never
/// retried here. List endpoints return most-recent-first.
#[async_trait::async_trait]
pub trait WellbeingApi: Send + Sync {
    async fn fetch_notations(
        &self,
        user: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<Notation>, ApiError>;

    async fn fetch_stats(&self, user: &str, window_days: u32)
        -> Result<NotationStats, ApiError>;

    async fn fetch_inputs(&self, user: &str, limit: usize) -> Result<Vec<RawInput>, ApiError>;

    async fn fetch_latest_input(&self, user: &str) -> Result<RawInput, ApiError>;

    async fn fetch_latest_advice(&self, user: &str) -> Result<AdviceOutput, ApiError>;

    async fn fetch_advice_history(
        &self,
        user: &str,
        limit: usize,
    ) -> Result<Vec<AdviceOutput>, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let base_url = settings.require_api_base_url()?.to_string();
        let timeout_secs = settings.api_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self::with_timeout(base_url, Duration::from_secs(timeout_secs))
    }

    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url.into(), Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    fn with_timeout(base_url: String, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build dashboard http client")?;

        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        resource: &'static str,
    ) -> Result<T, ApiError> {
        let url = self.url(path);

        let res = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                url: url.clone(),
                source,
            })?;

        let status = res.status();
        let text = res.text().await.map_err(|source| ApiError::Network {
            url: url.clone(),
            source,
        })?;

        if !status.is_success() {
            return Err(ApiError::Http {
                status,
                url,
                body: truncate_body(&text),
            });
        }

        serde_json::from_str(&text).map_err(|source| ApiError::Decode { resource, source })
    }

    /// 404 on a `latest` endpoint means "nothing yet", not a broken request.
    fn map_latest_404(
        err: ApiError,
        resource: &'static str,
        user: &str,
    ) -> ApiError {
        match err {
            ApiError::Http { status, .. } if status == StatusCode::NOT_FOUND => {
                ApiError::NotFound {
                    resource,
                    user: user.to_string(),
                }
            }
            other => other,
        }
    }
}

#[async_trait::async_trait]
impl WellbeingApi for HttpApiClient {
    async fn fetch_notations(
        &self,
        user: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<Vec<Notation>, ApiError> {
        let mut query = Vec::new();
        if let Some(d) = start {
            query.push(("start_date", format_ymd(d)));
        }
        if let Some(d) = end {
            query.push(("end_date", format_ymd(d)));
        }

        self.get_json(&format!("/notations/{user}"), &query, "notations")
            .await
    }

    async fn fetch_stats(
        &self,
        user: &str,
        window_days: u32,
    ) -> Result<NotationStats, ApiError> {
        let query = [("days", window_days.to_string())];
        self.get_json(&format!("/notations/stats/{user}"), &query, "notation stats")
            .await
    }

    async fn fetch_inputs(&self, user: &str, limit: usize) -> Result<Vec<RawInput>, ApiError> {
        let query = [("limit", limit.to_string())];
        self.get_json(&format!("/inputs/{user}"), &query, "inputs")
            .await
    }

    async fn fetch_latest_input(&self, user: &str) -> Result<RawInput, ApiError> {
        self.get_json(&format!("/inputs/latest/{user}"), &[], "latest input")
            .await
            .map_err(|e| Self::map_latest_404(e, "input", user))
    }

    async fn fetch_latest_advice(&self, user: &str) -> Result<AdviceOutput, ApiError> {
        self.get_json(&format!("/ai-output/latest/{user}"), &[], "latest advice")
            .await
            .map_err(|e| Self::map_latest_404(e, "advice", user))
    }

    async fn fetch_advice_history(
        &self,
        user: &str,
        limit: usize,
    ) -> Result<Vec<AdviceOutput>, ApiError> {
        let query = [("limit", limit.to_string())];
        self.get_json(&format!("/ai-output/{user}"), &query, "advice history")
            .await
    }
}

fn truncate_body(text: &str) -> String {
    if text.chars().count() <= MAX_LOGGED_BODY_CHARS {
        return text.to_string();
    }
    text.chars().take(MAX_LOGGED_BODY_CHARS).collect()
}
