use chrono::DateTime;

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_TIME_FORMAT: &str = "%Y-%m-%d";
    pub const HOVER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
}

/// Calendar date (UTC) of an epoch-ms timestamp, for chart labels.
/// Out-of-range timestamps render as "-".
pub fn epoch_ms_to_date_string(epoch_ms: i64) -> String {
    format_epoch_ms(epoch_ms, TimeUtils::STANDARD_TIME_FORMAT)
}

pub fn format_epoch_ms(epoch_ms: i64, fmt: &str) -> String {
    match DateTime::from_timestamp_millis(epoch_ms) {
        Some(dt) => dt.format(fmt).to_string(),
        None => "-".to_string(),
    }
}
