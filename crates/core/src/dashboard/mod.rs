//! Dashboard orchestration: one fetch cycle per subject user, a
//! Loading -> Ready | Failed state machine with a single writer, and a
//! request-generation guard so a stale cycle can never overwrite a newer one.

use crate::api::{ApiError, WellbeingApi, DEFAULT_STATS_WINDOW_DAYS};
use crate::domain::{AdviceOutput, Notation, NotationStats};
use crate::journal::JournalLog;
use crate::time::trailing_window;
use chrono::NaiveDate;

/// History and stats share the same trailing window.
pub const HISTORY_WINDOW_DAYS: i64 = DEFAULT_STATS_WINDOW_DAYS as i64;
pub const JOURNAL_FETCH_LIMIT: usize = 10;

/// Single generic message shown for any failed mandatory fetch; partial data
/// is never rendered.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load dashboard data. Please try again.";
pub const NO_TRENDS_MESSAGE: &str = "No trend data available";
pub const NO_ADVICE_MESSAGE: &str = "No recommendation available";
pub const NO_ENTRIES_MESSAGE: &str = "No journal entries";

#[derive(Debug)]
pub enum ViewState {
    Loading,
    Ready(DashboardData),
    Failed(String),
}

/// Everything one rendered page needs, assembled from a single fetch cycle.
/// `advice` is `None` both when no document exists and when the advice fetch
/// failed; the two cases are distinguished in the logs, not in the view.
#[derive(Debug)]
pub struct DashboardData {
    pub latest_notation: Option<Notation>,
    pub history: Vec<Notation>,
    pub stats: NotationStats,
    pub advice: Option<AdviceOutput>,
    pub journal: JournalLog,
}

impl DashboardData {
    pub fn has_trends(&self) -> bool {
        !self.history.is_empty()
    }
}

#[derive(Debug)]
pub struct Dashboard<C> {
    client: C,
    generation: u64,
    state: ViewState,
}

impl<C: WellbeingApi> Dashboard<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            generation: 0,
            state: ViewState::Loading,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Starts a new fetch cycle: clears held state back to `Loading` and
    /// returns the generation token the cycle must present to commit.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = ViewState::Loading;
        self.generation
    }

    /// Commits a finished cycle. Results from a superseded cycle (generation
    /// older than the latest `begin`) are discarded, which is what stands in
    /// for cancellation of in-flight fetches. Returns whether the outcome was
    /// applied.
    pub fn apply(&mut self, generation: u64, outcome: Result<DashboardData, ApiError>) -> bool {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "discarding stale dashboard fetch result"
            );
            return false;
        }

        self.state = match outcome {
            Ok(data) => ViewState::Ready(data),
            Err(err) => {
                tracing::error!(error = %err, "dashboard load failed");
                ViewState::Failed(LOAD_ERROR_MESSAGE.to_string())
            }
        };
        true
    }

    /// One full cycle for `user` as of `today`.
    pub async fn load(&mut self, user: &str, today: NaiveDate) -> &ViewState {
        let generation = self.begin();
        let outcome = fetch_dashboard(&self.client, user, today).await;
        self.apply(generation, outcome);
        self.state()
    }
}

/// The fetch sequence. Notations, stats and inputs are mandatory: the first
/// error aborts the cycle and discards everything already fetched. The advice
/// fetch is optional enrichment and degrades to `None`.
pub async fn fetch_dashboard<C: WellbeingApi + ?Sized>(
    client: &C,
    user: &str,
    today: NaiveDate,
) -> Result<DashboardData, ApiError> {
    let window = trailing_window(today, HISTORY_WINDOW_DAYS);

    let history = client
        .fetch_notations(user, Some(window.start), Some(window.end))
        .await?;

    let stats = client.fetch_stats(user, DEFAULT_STATS_WINDOW_DAYS).await?;

    let advice = match client.fetch_latest_advice(user).await {
        Ok(advice) => Some(advice),
        Err(err) if err.is_not_found() => {
            tracing::info!(user, "no advice available");
            None
        }
        Err(err) => {
            tracing::warn!(user, error = %err, "advice fetch failed; continuing without it");
            None
        }
    };

    let inputs = client.fetch_inputs(user, JOURNAL_FETCH_LIMIT).await?;

    // The backend returns notations most-recent-first, so the head of the
    // history is today's (or the newest) snapshot.
    let latest_notation = history.first().cloned();

    Ok(DashboardData {
        latest_notation,
        history,
        stats,
        advice,
        journal: JournalLog::new(inputs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawInput;
    use reqwest::StatusCode;
    use serde_json::json;

    /// Scripted in-memory backend. Each response is rebuilt per call from a
    /// JSON template or an error blueprint.
    #[derive(Default)]
    struct FakeApi {
        notations: Vec<serde_json::Value>,
        stats_error: Option<StatusCode>,
        inputs_error: Option<StatusCode>,
        advice: Option<serde_json::Value>,
        advice_error: Option<StatusCode>,
        inputs: Vec<serde_json::Value>,
    }

    impl FakeApi {
        fn http_error(status: StatusCode) -> ApiError {
            ApiError::Http {
                status,
                url: "http://fake".to_string(),
                body: String::new(),
            }
        }
    }

    #[async_trait::async_trait]
    impl WellbeingApi for FakeApi {
        async fn fetch_notations(
            &self,
            _user: &str,
            _start: Option<NaiveDate>,
            _end: Option<NaiveDate>,
        ) -> Result<Vec<Notation>, ApiError> {
            Ok(self
                .notations
                .iter()
                .map(|v| serde_json::from_value(v.clone()).unwrap())
                .collect())
        }

        async fn fetch_stats(
            &self,
            _user: &str,
            _window_days: u32,
        ) -> Result<NotationStats, ApiError> {
            if let Some(status) = self.stats_error {
                return Err(Self::http_error(status));
            }
            Ok(serde_json::from_value(json!({ "stats": {} })).unwrap())
        }

        async fn fetch_inputs(
            &self,
            _user: &str,
            _limit: usize,
        ) -> Result<Vec<RawInput>, ApiError> {
            if let Some(status) = self.inputs_error {
                return Err(Self::http_error(status));
            }
            Ok(self
                .inputs
                .iter()
                .map(|v| serde_json::from_value(v.clone()).unwrap())
                .collect())
        }

        async fn fetch_latest_input(&self, user: &str) -> Result<RawInput, ApiError> {
            Err(ApiError::NotFound {
                resource: "input",
                user: user.to_string(),
            })
        }

        async fn fetch_latest_advice(&self, user: &str) -> Result<AdviceOutput, ApiError> {
            if let Some(status) = self.advice_error {
                return Err(Self::http_error(status));
            }
            match &self.advice {
                Some(v) => Ok(serde_json::from_value(v.clone()).unwrap()),
                None => Err(ApiError::NotFound {
                    resource: "advice",
                    user: user.to_string(),
                }),
            }
        }

        async fn fetch_advice_history(
            &self,
            _user: &str,
            _limit: usize,
        ) -> Result<Vec<AdviceOutput>, ApiError> {
            Ok(Vec::new())
        }
    }

    fn notation_json(date: &str) -> serde_json::Value {
        json!({ "name": "alice", "date": date, "spiritual_note": 5 })
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()
    }

    #[tokio::test]
    async fn successful_cycle_reaches_ready_with_latest_notation_first() {
        let api = FakeApi {
            notations: vec![notation_json("2024/05/30"), notation_json("2024/05/29")],
            advice: Some(json!({ "Name": "alice", "Date": "2024/05/30", "output": "rest" })),
            ..Default::default()
        };

        let mut dashboard = Dashboard::new(api);
        match dashboard.load("alice", today()).await {
            ViewState::Ready(data) => {
                assert_eq!(
                    data.latest_notation.as_ref().map(|n| n.date.as_str()),
                    Some("2024/05/30")
                );
                assert_eq!(data.history.len(), 2);
                assert!(data.advice.is_some());
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn stats_500_fails_the_whole_cycle() {
        let api = FakeApi {
            notations: vec![notation_json("2024/05/30")],
            stats_error: Some(StatusCode::INTERNAL_SERVER_ERROR),
            ..Default::default()
        };

        let mut dashboard = Dashboard::new(api);
        match dashboard.load("alice", today()).await {
            ViewState::Failed(msg) => assert_eq!(msg, LOAD_ERROR_MESSAGE),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn inputs_error_fails_the_cycle() {
        let api = FakeApi {
            notations: vec![notation_json("2024/05/30")],
            inputs_error: Some(StatusCode::BAD_GATEWAY),
            ..Default::default()
        };

        let mut dashboard = Dashboard::new(api);
        assert!(matches!(
            dashboard.load("alice", today()).await,
            ViewState::Failed(_)
        ));
    }

    #[tokio::test]
    async fn advice_failure_is_tolerated() {
        let api = FakeApi {
            notations: vec![notation_json("2024/05/30")],
            advice_error: Some(StatusCode::INTERNAL_SERVER_ERROR),
            ..Default::default()
        };

        let mut dashboard = Dashboard::new(api);
        match dashboard.load("alice", today()).await {
            ViewState::Ready(data) => assert!(data.advice.is_none()),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_advice_is_absent_not_an_error() {
        let api = FakeApi {
            notations: vec![notation_json("2024/05/30")],
            ..Default::default()
        };

        let mut dashboard = Dashboard::new(api);
        match dashboard.load("alice", today()).await {
            ViewState::Ready(data) => assert!(data.advice.is_none()),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_history_is_ready_with_no_trends() {
        let api = FakeApi::default();
        let mut dashboard = Dashboard::new(api);
        match dashboard.load("alice", today()).await {
            ViewState::Ready(data) => {
                assert!(!data.has_trends());
                assert!(data.latest_notation.is_none());
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn stale_generation_result_is_discarded() {
        let api = FakeApi {
            notations: vec![notation_json("2024/05/30")],
            ..Default::default()
        };
        let mut dashboard = Dashboard::new(api);

        let stale = dashboard.begin();
        let stale_outcome = fetch_dashboard(&FakeApi::default(), "bob", today()).await;

        // A newer cycle starts before the stale one lands.
        let current = dashboard.begin();
        assert!(!dashboard.apply(stale, stale_outcome));
        assert!(matches!(dashboard.state(), ViewState::Loading));

        let outcome = fetch_dashboard(
            &FakeApi {
                notations: vec![notation_json("2024/05/30")],
                ..Default::default()
            },
            "alice",
            today(),
        )
        .await;
        assert!(dashboard.apply(current, outcome));
        assert!(matches!(dashboard.state(), ViewState::Ready(_)));
    }
}
