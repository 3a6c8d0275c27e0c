//! Parsing and rendering of video lengths.

use crate::error::{Error, Result};
use jiff::{SignedDuration, Span, SpanRelativeTo};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Parses an ISO 8601 duration as the API reports video lengths, e.g. `PT1H2M3S`.
///
/// Videos longer than a day are reported with a day component (`P1DT2H`); days are taken to
/// be exactly 24 hours long. Calendar units (years, months) are rejected.
pub fn parse_iso8601(value: &str) -> Result<SignedDuration> {
    let into_error = |source: jiff::Error| Error::Duration {
        value: value.to_string(),
        source,
    };
    let span: Span = value.parse().map_err(into_error)?;
    span.to_duration(SpanRelativeTo::days_are_24_hours())
        .map_err(into_error)
}

/// Renders a duration as `H:MM:SS`, prefixed with `N day(s), ` when it spans whole days.
///
/// Sub-second precision is dropped; the API never reports it for videos.
pub fn format_hms(duration: SignedDuration) -> String {
    let sign = if duration.is_negative() { "-" } else { "" };
    let total = duration.as_secs().unsigned_abs();
    let days = total / SECONDS_PER_DAY;
    let rest = total % SECONDS_PER_DAY;
    let (hours, minutes, seconds) = (rest / 3600, rest % 3600 / 60, rest % 60);

    match days {
        0 => format!("{sign}{hours}:{minutes:02}:{seconds:02}"),
        1 => format!("{sign}1 day, {hours}:{minutes:02}:{seconds:02}"),
        n => format!("{sign}{n} days, {hours}:{minutes:02}:{seconds:02}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_time_only_durations() {
        assert_eq!(parse_iso8601("PT1H").unwrap(), SignedDuration::from_hours(1));
        assert_eq!(parse_iso8601("PT30M").unwrap(), SignedDuration::from_mins(30));
        assert_eq!(
            parse_iso8601("PT4M13S").unwrap(),
            SignedDuration::from_secs(4 * 60 + 13)
        );
    }

    #[test]
    fn days_count_as_24_hours() {
        assert_eq!(
            parse_iso8601("P1DT2H").unwrap(),
            SignedDuration::from_hours(26)
        );
    }

    #[test]
    fn zero_length_is_accepted() {
        // live streams report P0D
        assert_eq!(parse_iso8601("P0D").unwrap(), SignedDuration::ZERO);
        assert_eq!(parse_iso8601("PT0S").unwrap(), SignedDuration::ZERO);
    }

    #[test]
    fn garbage_is_a_duration_error() {
        let err = parse_iso8601("one hour").unwrap_err();
        assert!(matches!(err, Error::Duration { ref value, .. } if value == "one hour"));
    }

    #[test]
    fn format_matches_h_mm_ss() {
        assert_eq!(format_hms(SignedDuration::ZERO), "0:00:00");
        assert_eq!(format_hms(SignedDuration::from_secs(5410)), "1:30:10");
        assert_eq!(format_hms(SignedDuration::from_secs(59)), "0:00:59");
        assert_eq!(format_hms(SignedDuration::from_hours(26)), "1 day, 2:00:00");
        assert_eq!(
            format_hms(SignedDuration::from_hours(49) + SignedDuration::from_secs(7)),
            "2 days, 1:00:07"
        );
    }

    #[test]
    fn summed_members_render_as_expected() {
        let total = ["PT1H", "PT30M", "PT10S"]
            .into_iter()
            .map(|d| parse_iso8601(d).unwrap())
            .fold(SignedDuration::ZERO, |acc, d| acc + d);
        assert_eq!(format_hms(total), "1:30:10");
    }
}
