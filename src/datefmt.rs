// src/datefmt.rs
// Locale-fixed (zh-CN numeric) event date formatting.

use chrono::{DateTime, NaiveDateTime};

/// Rendered for input that no parser accepts. Mirrors the host-side
/// "Invalid Date" degraded output rather than failing the render.
pub const INVALID_DATE: &str = "Invalid Date";

/// Format an ISO-parseable timestamp as `YYYY/MM/DD HH:MM` — the zh-CN
/// numeric shape (numeric year, two-digit month/day/hour/minute).
///
/// The timestamp keeps its own offset; the core is headless and does not
/// guess a host timezone. Unparseable input yields [`INVALID_DATE`].
pub fn format_event_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y/%m/%d %H:%M").to_string();
    }
    // Common DB export shape without offset, e.g. "2025-01-01 10:00:00".
    for pat in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pat) {
            return dt.format("%Y/%m/%d %H:%M").to_string();
        }
    }
    INVALID_DATE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_renders_numeric_zh_shape() {
        assert_eq!(
            format_event_date("2025-01-01T10:00:00Z"),
            "2025/01/01 10:00"
        );
    }

    #[test]
    fn offset_is_kept_not_converted() {
        assert_eq!(
            format_event_date("2025-03-05T09:07:00+08:00"),
            "2025/03/05 09:07"
        );
    }

    #[test]
    fn naive_db_shape_is_accepted() {
        assert_eq!(
            format_event_date("2025-01-02 08:30:00"),
            "2025/01/02 08:30"
        );
    }

    #[test]
    fn garbage_degrades_to_invalid_date() {
        assert_eq!(format_event_date("not a date"), INVALID_DATE);
        assert_eq!(format_event_date(""), INVALID_DATE);
    }
}
