// Schedule date codec
//
// The rendered form `DD-MM-YYYY HH:mm` is part of the wire contract and must
// match character for character. Schedule dates are naive wall-clock values.

use chrono::NaiveDateTime;

use crate::error::{Result, SchedulerError};

/// Render format for schedule dates in response payloads
pub const SCHEDULE_FORMAT: &str = "%d-%m-%Y %H:%M";

// Accepted inbound shapes, tried in order. The first is the form the chat
// platform delivers; the last lets users repeat a date the bot rendered.
const INPUT_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%d-%m-%Y %H:%M"];

/// Format a schedule date for a response payload
pub fn format_schedule(at: NaiveDateTime) -> String {
    at.format(SCHEDULE_FORMAT).to_string()
}

/// Parse inbound schedule text
pub fn parse_schedule(text: &str) -> Result<NaiveDateTime> {
    let trimmed = text.trim();
    for format in INPUT_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }
    Err(SchedulerError::validation(format!(
        "unrecognized schedule date: {trimmed}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_platform_form() {
        let parsed = parse_schedule("2024-05-01T18:00").unwrap();
        assert_eq!(format_schedule(parsed), "01-05-2024 18:00");
    }

    #[test]
    fn test_parse_spaced_form() {
        let parsed = parse_schedule("2024-05-01 18:00").unwrap();
        assert_eq!(format_schedule(parsed), "01-05-2024 18:00");
    }

    #[test]
    fn test_parse_rendered_form_roundtrips() {
        let parsed = parse_schedule("24-12-2024 09:05").unwrap();
        assert_eq!(format_schedule(parsed), "24-12-2024 09:05");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let parsed = parse_schedule("  2024-05-01T18:00  ").unwrap();
        assert_eq!(format_schedule(parsed), "01-05-2024 18:00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_schedule("next tuesday").is_err());
        assert!(parse_schedule("").is_err());
        assert!(parse_schedule("2024-13-01T18:00").is_err());
    }

    #[test]
    fn test_single_digit_fields_are_zero_padded() {
        let parsed = parse_schedule("2024-01-02T03:04").unwrap();
        assert_eq!(format_schedule(parsed), "02-01-2024 03:04");
    }
}
