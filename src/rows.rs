//! Projection of catalog summaries into table rows.

use regex::Regex;
use std::sync::LazyLock;

use crate::catalog::Summary;

/// Display-ready projection of a [`Summary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u64,
    pub name: String,
}

/// Maximal runs of ASCII digits.
static DIGIT_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit pattern is valid"));

/// Numeric value of the last run of ASCII digits in `url`, or 0 if there is none.
///
/// Runs too large for `u64` saturate at `u64::MAX`.
pub fn extract_id(url: &str) -> u64 {
    DIGIT_RUNS
        .find_iter(url)
        .last()
        .map(|run| {
            run.as_str().bytes().fold(0u64, |acc, digit| {
                acc.saturating_mul(10)
                    .saturating_add(u64::from(digit - b'0'))
            })
        })
        .unwrap_or(0)
}

/// Maps summaries to rows, one for one and in order. Duplicate ids are kept.
pub fn map_rows(summaries: &[Summary]) -> Vec<Row> {
    summaries
        .iter()
        .map(|summary| Row {
            id: extract_id(&summary.url),
            name: summary.name.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, url: &str) -> Summary {
        Summary {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn takes_last_digit_run() {
        assert_eq!(extract_id("https://pokeapi.co/api/v2/pokemon/1/"), 1);
        assert_eq!(extract_id("https://pokeapi.co/api/v2/pokemon/151/"), 151);
        assert_eq!(extract_id("a1b22c333"), 333);
    }

    #[test]
    fn no_digits_defaults_to_zero() {
        assert_eq!(extract_id("https://example.com/pokemon/mew/"), 0);
        assert_eq!(extract_id(""), 0);
    }

    #[test]
    fn leading_zeros_are_numeric() {
        assert_eq!(extract_id("/items/007/"), 7);
    }

    #[test]
    fn oversized_run_saturates() {
        assert_eq!(extract_id("/items/99999999999999999999999/"), u64::MAX);
    }

    #[test]
    fn non_ascii_digits_are_not_matched() {
        // Arabic-Indic digits
        assert_eq!(extract_id("/items/\u{0661}\u{0662}/"), 0);
    }

    #[test]
    fn preserves_length_and_order() {
        let summaries = vec![
            summary("mew", "https://pokeapi.co/api/v2/pokemon/151/"),
            summary("missingno", "https://pokeapi.co/api/v2/pokemon/unknown/"),
            summary("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/"),
            summary("bulbasaur-copy", "https://pokeapi.co/api/v2/pokemon/1/"),
        ];
        let rows = map_rows(&summaries);
        assert_eq!(rows.len(), summaries.len());
        let ids: Vec<u64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![151, 0, 1, 1]);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["mew", "missingno", "bulbasaur", "bulbasaur-copy"]);
    }

    #[test]
    fn empty_input_maps_to_empty_output() {
        assert!(map_rows(&[]).is_empty());
    }
}
