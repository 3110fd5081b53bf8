use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ServiceError, ServiceResult};
use crate::types::FilterSpec;

/// Word-count phrases like "3 word" or "single word".
static WORD_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+|single|two|three|four|five) word").unwrap());

/// Lower length bound, exclusive: "longer than 5".
static MIN_LENGTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(longer|greater) than (\d+)").unwrap());

/// Upper length bound, exclusive: "shorter than 10".
static MAX_LENGTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(shorter|less) than (\d+)").unwrap());

/// Explicit letter mention, quoted or bare: `containing the letter "x"`.
static CONTAINS_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"containing the letter "?([a-z])"?"#).unwrap());

/// Parse a free-text query into a [`FilterSpec`] using a fixed set of
/// heuristics.
///
/// Matching is case-insensitive; the heuristics fire independently, so one
/// query may populate several fields. Fails when no heuristic matches —
/// callers must treat an all-empty spec as invalid, not as "match
/// everything".
pub fn parse_natural_query(query: &str) -> ServiceResult<FilterSpec> {
    let lower = query.to_lowercase();
    let mut spec = FilterSpec::default();

    if lower.contains("palindrom") {
        spec.is_palindrome = Some(true);
    }

    if let Some(caps) = WORD_COUNT.captures(&lower) {
        spec.word_count = word_token_value(&caps[1]);
    }

    // Bounds are exclusive in the phrasing ("longer than 5" means at least
    // 6), so shift by one. A numeral too large for i64 makes the heuristic
    // fall through without aborting the others.
    if let Some(caps) = MIN_LENGTH.captures(&lower) {
        spec.min_length = caps[2].parse::<i64>().ok().and_then(|n| n.checked_add(1));
    }
    if let Some(caps) = MAX_LENGTH.captures(&lower) {
        spec.max_length = caps[2].parse::<i64>().ok().and_then(|n| n.checked_sub(1));
    }

    // "vowel" wins over an explicit letter mention. The stand-in 'a' is a
    // known simplification, never generalized to real vowel matching.
    if lower.contains("vowel") {
        spec.contains_character = Some('a');
    } else if let Some(caps) = CONTAINS_LETTER.captures(&lower) {
        spec.contains_character = caps[1].chars().next();
    }

    if spec.is_empty() {
        return Err(ServiceError::Unparseable(
            "query matched no known filters".to_string(),
        ));
    }

    Ok(spec)
}

fn word_token_value(token: &str) -> Option<i64> {
    match token {
        "single" => Some(1),
        "two" => Some(2),
        "three" => Some(3),
        "four" => Some(4),
        "five" => Some(5),
        _ => token.parse().ok(),
    }
}
