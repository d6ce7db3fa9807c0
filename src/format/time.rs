use crate::core::StoreTimestamp;

/// Render a store timestamp as a calendar date, `MM/DD/YYYY`.
pub fn format_store_time(ts: StoreTimestamp) -> String {
    ts.to_date().format("%m/%d/%Y").to_string()
}
