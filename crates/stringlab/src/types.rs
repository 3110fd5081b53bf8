use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored string together with its derived properties.
///
/// Immutable once created; `id` is the SHA-256 hash of `value` and doubles
/// as the record's identity in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedString {
    pub id: String,
    pub value: String,
    pub properties: StringProperties,
    pub created_at: DateTime<Utc>,
}

/// Properties derived entirely from a record's `value`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringProperties {
    /// Length in Unicode code points.
    pub length: usize,
    pub is_palindrome: bool,
    pub unique_characters: usize,
    pub word_count: usize,
    pub sha256_hash: String,
    pub character_frequency_map: BTreeMap<char, u64>,
}

/// Conjunction of optional filter criteria.
///
/// Absent fields impose no constraint. An all-empty spec matches every
/// record when handed to the filter engine, but the natural-language parser
/// refuses to produce one.
///
/// Length and word-count bounds are signed so that parser arithmetic such as
/// "shorter than 0" yields `-1` (matches nothing) instead of wrapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterSpec {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }
}
