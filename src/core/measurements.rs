use once_cell::sync::Lazy;
use regex::Regex;

/// Two- or three-digit ASCII numeric tokens, no unit handling
static MEASUREMENT_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{2,3}").expect("measurement token regex"));

/// Extract measurement numbers from free text, left to right
///
/// Only ASCII digits count; other Unicode digit scripts are plain text here.
/// Matches are non-overlapping, so "1234" yields only `[123]`.
pub fn extract_measurements(text: &str) -> Vec<u32> {
    MEASUREMENT_TOKEN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Render text with its measurement list appended, e.g. `"fits 34 38[34, 38]"`
pub(crate) fn with_measurement_suffix(text: &str, measurements: &[u32]) -> String {
    format!("{}{:?}", text, measurements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_in_order() {
        assert_eq!(extract_measurements("I'm 34 underbust and 38 bust"), vec![34, 38]);
        assert_eq!(extract_measurements("38 then 30"), vec![38, 30]);
    }

    #[test]
    fn test_ignores_single_digits() {
        assert_eq!(extract_measurements("size 5 or 7, band 32"), vec![32]);
    }

    #[test]
    fn test_long_runs_split_greedily() {
        assert_eq!(extract_measurements("1234"), vec![123]);
        assert_eq!(extract_measurements("12345"), vec![123, 45]);
    }

    #[test]
    fn test_only_ascii_digits() {
        assert!(extract_measurements("\u{663}\u{664} \u{663}\u{668}").is_empty());
        assert!(extract_measurements("\u{ff13}\u{ff14} \u{ff13}\u{ff18}").is_empty());
        assert_eq!(extract_measurements("\u{ff13}\u{ff14} then 34 38"), vec![34, 38]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_measurements("").is_empty());
        assert!(extract_measurements("no numbers here").is_empty());
    }

    #[test]
    fn test_measurement_suffix() {
        assert_eq!(with_measurement_suffix("fits 34 38", &[34, 38]), "fits 34 38[34, 38]");
        assert_eq!(with_measurement_suffix("none", &[]), "none[]");
    }
}
