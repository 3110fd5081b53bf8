use crate::types::{AnalyzedString, FilterSpec};

/// Apply `spec` to `records`, returning the matching subset in the order the
/// records were given (insertion order of the backing store).
///
/// Present fields combine as a conjunction; an empty spec matches every
/// record. Never mutates its inputs.
pub fn apply_filters(records: &[AnalyzedString], spec: &FilterSpec) -> Vec<AnalyzedString> {
    records
        .iter()
        .filter(|record| matches(record, spec))
        .cloned()
        .collect()
}

fn matches(record: &AnalyzedString, spec: &FilterSpec) -> bool {
    let props = &record.properties;

    if let Some(flag) = spec.is_palindrome {
        if props.is_palindrome != flag {
            return false;
        }
    }
    if let Some(min) = spec.min_length {
        if (props.length as i64) < min {
            return false;
        }
    }
    if let Some(max) = spec.max_length {
        if (props.length as i64) > max {
            return false;
        }
    }
    if let Some(count) = spec.word_count {
        if props.word_count as i64 != count {
            return false;
        }
    }
    if let Some(ch) = spec.contains_character {
        // Case-sensitive containment over the raw value.
        if !record.value.contains(ch) {
            return false;
        }
    }

    true
}
