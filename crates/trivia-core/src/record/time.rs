//! Elapsed-time strings in `M+:SS:CC` form (minutes, seconds, centiseconds).

/// Parse an elapsed-time string into milliseconds.
///
/// Missing or non-numeric segments count as zero, so `""`, `"1"` and
/// `"garbage"` never fail.
pub fn parse_time_ms(time: &str) -> u64 {
    let mut segments = time.trim().split(':').map(parse_segment);
    let minutes = segments.next().unwrap_or(0);
    let seconds = segments.next().unwrap_or(0);
    let centis = segments.next().unwrap_or(0);

    minutes * 60_000 + seconds * 1_000 + centis * 10
}

fn parse_segment(segment: &str) -> u64 {
    segment.trim().parse().unwrap_or(0)
}

/// Format milliseconds back into `MM:SS:CC`.
pub fn format_time_ms(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let centis = (ms % 1_000) / 10;
    format!("{:02}:{:02}:{:02}", minutes, seconds, centis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_ms() {
        assert_eq!(parse_time_ms("01:30:00"), 90_000);
        assert_eq!(parse_time_ms("00:00:01"), 10);
        assert_eq!(parse_time_ms("12:05:50"), 12 * 60_000 + 5_000 + 500);
        // minutes may exceed two digits
        assert_eq!(parse_time_ms("120:00:00"), 7_200_000);
    }

    #[test]
    fn test_parse_time_ms_missing_segments() {
        assert_eq!(parse_time_ms(""), 0);
        assert_eq!(parse_time_ms("2"), 120_000);
        assert_eq!(parse_time_ms("2:30"), 150_000);
        assert_eq!(parse_time_ms("xx:10:yy"), 10_000);
    }

    #[test]
    fn test_format_time_ms() {
        assert_eq!(format_time_ms(90_000), "01:30:00");
        assert_eq!(format_time_ms(0), "00:00:00");
        assert_eq!(format_time_ms(parse_time_ms("03:07:42")), "03:07:42");
    }
}
