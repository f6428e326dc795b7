use regex::Regex;
use std::sync::LazyLock;

static HHMM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap());

pub fn is_valid_hhmm(value: &str) -> bool {
    HHMM_RE.is_match(value)
}

/// Minutes since midnight, or None for anything that is not strict "HH:mm".
pub fn parse_hhmm(value: &str) -> Option<u32> {
    if !is_valid_hhmm(value) {
        return None;
    }
    let (hours, minutes) = value.split_once(':')?;
    Some(hours.parse::<u32>().ok()? * 60 + minutes.parse::<u32>().ok()?)
}

/// Half-open overlap: [a_start, a_end) against [b_start, b_end).
/// Back-to-back ranges do not overlap.
pub fn ranges_overlap(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start < b_end && b_start < a_end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_times() {
        assert_eq!(parse_hhmm("00:00"), Some(0));
        assert_eq!(parse_hhmm("09:30"), Some(570));
        assert_eq!(parse_hhmm("23:59"), Some(23 * 60 + 59));
    }

    #[test]
    fn rejects_malformed_times() {
        for bad in ["24:00", "9:00", "10:60", "1000", "10:0", "", "ab:cd", "10:00:00"] {
            assert_eq!(parse_hhmm(bad), None, "{bad} should be rejected");
        }
    }

    #[test]
    fn back_to_back_ranges_do_not_overlap() {
        let nine = parse_hhmm("09:00").unwrap();
        let eleven = parse_hhmm("11:00").unwrap();
        let one = parse_hhmm("13:00").unwrap();
        assert!(!ranges_overlap(nine, eleven, eleven, one));
    }

    #[test]
    fn contained_and_straddling_ranges_overlap() {
        assert!(ranges_overlap(600, 720, 630, 660));
        assert!(ranges_overlap(600, 720, 660, 780));
        assert!(ranges_overlap(660, 780, 600, 720));
    }
}
