//! Timer arithmetic: H:M:S fields to seconds and back.
//!
//! The ticking interval itself belongs to the UI event loop; this module
//! only owns the conversions around it.

use crate::error::ToolError;

/// Combine the widget's three timer fields into a second count.
///
/// Minutes and seconds are capped at 59 as in the inputs themselves, and
/// a zero total is rejected the same way the widget refuses to start.
pub fn duration_seconds(hours: u32, minutes: u32, seconds: u32) -> Result<u32, ToolError> {
    if minutes > 59 {
        return Err(ToolError::invalid_input("minutes", "must be 59 or less"));
    }
    if seconds > 59 {
        return Err(ToolError::invalid_input("seconds", "must be 59 or less"));
    }
    let total = hours * 3600 + minutes * 60 + seconds;
    if total == 0 {
        return Err(ToolError::invalid_input(
            "timer duration",
            "must be longer than zero seconds",
        ));
    }
    Ok(total)
}

/// Format a second count as zero-padded `HH:MM:SS`.
pub fn format_hms(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_fields() {
        assert_eq!(duration_seconds(1, 5, 0).unwrap(), 3900);
        assert_eq!(duration_seconds(0, 0, 1).unwrap(), 1);
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert!(duration_seconds(0, 60, 0).is_err());
        assert!(duration_seconds(0, 0, 60).is_err());
    }

    #[test]
    fn rejects_zero_duration() {
        let err = duration_seconds(0, 0, 0).unwrap_err();
        assert!(matches!(err, ToolError::InvalidInput { field, .. } if field == "timer duration"));
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(3900), "01:05:00");
        assert_eq!(format_hms(59), "00:00:59");
        assert_eq!(format_hms(86399), "23:59:59");
    }

    #[test]
    fn hours_keep_growing_past_a_day() {
        // The stopwatch counts up without wrapping.
        assert_eq!(format_hms(90 * 3600 + 61), "90:01:01");
    }

    #[test]
    fn round_trips_through_formatting() {
        let total = duration_seconds(2, 34, 56).unwrap();
        assert_eq!(format_hms(total), "02:34:56");
    }
}
