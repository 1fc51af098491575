mod maths_utils;
mod perf;
mod time_utils;

pub use time_utils::{TimeUtils, epoch_ms_to_date_string, format_epoch_ms};
pub use web_time::Instant as AppInstant;

pub(crate) use maths_utils::min_max;
