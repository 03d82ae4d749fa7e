pub mod category;
pub mod records;
pub mod stats;

pub use category::Category;
pub use records::{AdviceOutput, Notation, RawInput};
pub use stats::{NotationStats, StatSummary, Trend};
