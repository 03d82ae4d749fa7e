mod client;
mod error;

pub use client::{
    HttpApiClient, WellbeingApi, DEFAULT_ADVICE_LIMIT, DEFAULT_INPUT_LIMIT,
    DEFAULT_STATS_WINDOW_DAYS,
};
pub use error::ApiError;
