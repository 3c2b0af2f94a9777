mod common;
pub use self::common::{Function, Query};

mod daily;
pub use self::daily::{DailySeriesQuery, OutputSize};
