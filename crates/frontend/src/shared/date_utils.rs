//! Date and time formatting for tables and dashboard captions.
use chrono::{DateTime, Local};

/// "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02".
/// Unparseable input is returned unchanged.
pub fn format_datetime(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// "Updated at HH:MM:SS" caption for the dashboard.
pub fn updated_caption(at: DateTime<Local>) -> String {
    format!("Updated at {}", at.format("%H:%M:%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59+00:00"), "31.12.2024 23:59");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
    }

    #[test]
    fn test_updated_caption() {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 9, 5, 7).unwrap();
        assert_eq!(updated_caption(at), "Updated at 09:05:07");
    }
}
