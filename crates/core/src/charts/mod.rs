//! Pure adapters that reshape fetched records into chart-ready data. None of
//! these touch the network or mutate their inputs.

mod radar;
mod series;
mod stat_cards;

pub use radar::{radar_points, RadarPoint, FULL_MARK};
pub use series::{series_lines, series_rows, SeriesLine, SeriesRow};
pub use stat_cards::{stat_cards, StatCard};
