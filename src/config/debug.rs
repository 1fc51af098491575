//! Debugging feature flags.

pub struct LogFlags {
    /// Log each coin-list and chart fetch as it completes.
    pub log_fetches: bool,

    /// Log favorites loads, toggles and saves.
    pub log_favorites: bool,

    /// Activate trace_time macro (for cool scope-level timing)
    pub log_performance: bool,

    /// Log every sort/search/filter change in the table.
    pub log_view_changes: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetches: true,
    log_favorites: true,
    log_performance: false,
    log_view_changes: false,
};
