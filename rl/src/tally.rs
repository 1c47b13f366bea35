//! Summing distance entries from a run log

use log::debug;
use std::io::Read;

use crate::error::RunLogError;

/// Result of reading a run log
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    /// Sum of every distance consumed
    pub total: f64,
    /// Number of distance entries consumed
    pub entries: usize,
    /// First token that was not a distance, where reading stopped
    pub stopped_at: Option<String>,
}

impl Tally {
    /// Total cast toward zero; saturates at the i64 bounds and maps NaN to 0
    pub fn truncated(&self) -> i64 {
        self.total as i64
    }
}

/// Sum whitespace-separated distances until end of input or the first
/// token that is not a finite number
///
/// Tokens follow Rust's `f64` grammar (`+5`, `1e3` are distances), not
/// Java's locale-aware `Scanner`: grouped `1,000` ends the log, and so do
/// `NaN`, `inf` and `Infinity`.
pub fn sum_distances(text: &str) -> Tally {
    let mut tally = Tally::default();

    for token in text.split_whitespace() {
        match parse_distance(token) {
            Some(distance) => {
                tally.total += distance;
                tally.entries += 1;
            }
            None => {
                tally.stopped_at = Some(token.to_string());
                break;
            }
        }
    }

    debug!("sum_distances: total={} entries={} stopped_at={:?}", tally.total, tally.entries, tally.stopped_at);
    tally
}

/// Read the whole source and sum it. Bytes that are not UTF-8 decode to
/// U+FFFD, which is not a distance, so reading stops there.
pub fn read_tally<R: Read>(mut reader: R) -> Result<Tally, RunLogError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(sum_distances(&String::from_utf8_lossy(&bytes)))
}

fn parse_distance(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|d| d.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sums_lines_and_spaces() {
        let tally = sum_distances("3.1\n6.2 5\n\n  10.0\n");
        assert!((tally.total - 24.3).abs() < 1e-9);
        assert_eq!(tally.entries, 4);
        assert_eq!(tally.stopped_at, None);
    }

    #[test]
    fn test_empty_input_is_zero() {
        assert_eq!(sum_distances("").total, 0.0);
        assert_eq!(sum_distances("   \n\t\n").total, 0.0);
        assert_eq!(sum_distances("").entries, 0);
    }

    #[test]
    fn test_stops_at_first_non_numeric_token() {
        let tally = sum_distances("5.0 abc 3.0");
        assert_eq!(tally.total, 5.0);
        assert_eq!(tally.entries, 1);
        assert_eq!(tally.stopped_at.as_deref(), Some("abc"));
    }

    #[test]
    fn test_leading_garbage_yields_zero() {
        let tally = sum_distances("miles 4.0 2.0");
        assert_eq!(tally.total, 0.0);
        assert_eq!(tally.entries, 0);
    }

    #[test]
    fn test_non_finite_tokens_stop_reading() {
        assert_eq!(sum_distances("1.5 inf 2.0").total, 1.5);
        assert_eq!(sum_distances("1.5 NaN 2.0").total, 1.5);
        assert_eq!(sum_distances("infinity").entries, 0);
    }

    #[test]
    fn test_no_trailing_newline_required() {
        assert_eq!(sum_distances("2.5\n2.5").total, 5.0);
    }

    #[test]
    fn test_truncated_rounds_toward_zero() {
        let tally = Tally {
            total: 249.99,
            ..Default::default()
        };
        assert_eq!(tally.truncated(), 249);

        let tally = Tally {
            total: -3.7,
            ..Default::default()
        };
        assert_eq!(tally.truncated(), -3);
    }

    #[test]
    fn test_read_tally_from_reader() {
        let tally = read_tally("10 20 30".as_bytes()).unwrap();
        assert_eq!(tally.total, 60.0);
        assert_eq!(tally.entries, 3);
    }

    #[test]
    fn test_read_tally_stops_at_invalid_utf8() {
        let tally = read_tally(&b"5.0 \xFF\xFE 3.0\n"[..]).unwrap();
        assert_eq!(tally.total, 5.0);
        assert_eq!(tally.entries, 1);
        assert!(tally.stopped_at.is_some());
    }

    #[test]
    fn test_token_grammar_is_rusts() {
        assert_eq!(sum_distances("+5 1e3").total, 1005.0);
        assert_eq!(sum_distances("2 1,000 3").total, 2.0);
        assert_eq!(sum_distances("Infinity").stopped_at.as_deref(), Some("Infinity"));
    }

    proptest! {
        #[test]
        fn test_total_is_order_independent_sum(
            distances in prop::collection::vec(0.0f64..50.0, 0..64)
        ) {
            let forward: Vec<String> = distances.iter().map(|d| d.to_string()).collect();
            let reversed: Vec<String> = forward.iter().rev().cloned().collect();

            let expected: f64 = distances.iter().sum();
            let a = sum_distances(&forward.join("\n"));
            let b = sum_distances(&reversed.join(" "));

            prop_assert_eq!(a.entries, distances.len());
            prop_assert!((a.total - expected).abs() < 1e-6);
            prop_assert!((a.total - b.total).abs() < 1e-6);
        }
    }
}
