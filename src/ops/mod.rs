pub mod stats;
pub mod week_ops;

pub use stats::{DayStats, WeekStats, week_stats};
pub use week_ops::{StoreError, WeekStore};
