//! Derived-property computation for submitted strings.

use std::collections::BTreeMap;

use chrono::Utc;
use sha2::{Digest, Sha256};

use crate::types::{AnalyzedString, StringProperties};

/// Lower-case hex SHA-256 digest of the UTF-8 bytes of `value`.
pub fn sha256_hex(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

/// Palindrome check over the lower-cased value with everything but ASCII
/// letters and digits stripped. An empty string after stripping counts as a
/// palindrome.
pub fn is_palindrome(value: &str) -> bool {
    let cleaned: Vec<char> = value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

/// Per-character occurrence counts over every character of `value`.
pub fn char_frequency(value: &str) -> BTreeMap<char, u64> {
    let mut freq = BTreeMap::new();
    for c in value.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}

/// Count of maximal whitespace-delimited tokens; 0 for blank input.
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Compute the full property set for `value`.
pub fn properties(value: &str) -> StringProperties {
    let frequency = char_frequency(value);
    StringProperties {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_characters: frequency.len(),
        word_count: word_count(value),
        sha256_hash: sha256_hex(value),
        character_frequency_map: frequency,
    }
}

/// Build a complete record for `value`, stamped with the current time.
pub fn analyze(value: &str) -> AnalyzedString {
    let properties = properties(value);
    AnalyzedString {
        id: properties.sha256_hash.clone(),
        value: value.to_string(),
        properties,
        created_at: Utc::now(),
    }
}
