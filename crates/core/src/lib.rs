pub mod advice;
pub mod api;
pub mod charts;
pub mod dashboard;
pub mod domain;
pub mod journal;
pub mod time;

pub mod config {
    use anyhow::Context;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub api_base_url: Option<String>,
        pub api_timeout_secs: Option<u64>,
        pub sentry_dsn: Option<String>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            let api_timeout_secs = std::env::var("DASHBOARD_API_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok());

            Ok(Self {
                api_base_url: std::env::var("DASHBOARD_API_BASE_URL").ok(),
                api_timeout_secs,
                sentry_dsn: std::env::var("SENTRY_DSN").ok(),
            })
        }

        pub fn require_api_base_url(&self) -> anyhow::Result<&str> {
            self.api_base_url
                .as_deref()
                .context("DASHBOARD_API_BASE_URL is required")
        }
    }
}
