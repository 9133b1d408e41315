// ============================================================
// LANGUAGE FILTER
// ============================================================
// Cheap "targets English speakers" heuristic on app names

use crate::domain::dataset::AppRecord;

/// Names with more than this many characters above U+007F are dropped
pub const MAX_NON_ASCII_CHARS: usize = 3;

/// Number of characters whose codepoint exceeds 127
pub fn non_ascii_count(text: &str) -> usize {
    text.chars().filter(|c| *c as u32 > 127).count()
}

/// Keep names with at most `MAX_NON_ASCII_CHARS` high-codepoint characters.
/// Tolerates the odd ™ or emoji; no normalization is applied.
pub fn is_english(text: &str) -> bool {
    non_ascii_count(text) <= MAX_NON_ASCII_CHARS
}

/// Records whose name passes `is_english`
pub fn filter_english<R: AppRecord>(records: &[R]) -> Vec<R> {
    records
        .iter()
        .filter(|r| is_english(r.name()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_names() {
        assert!(is_english("Instagram"));
        assert!(!is_english("爱奇艺PPS -《欢乐颂2》电视剧热播"));
        assert!(is_english("Docs To Go™ Free Office Suite"));
        assert!(is_english("Instachat 😜"));
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(is_english("abc ééé"));
        assert!(!is_english("abc éééé"));
    }

    #[test]
    fn test_counts_codepoints_not_bytes() {
        // one emoji is four UTF-8 bytes but a single char
        assert_eq!(non_ascii_count("😜"), 1);
        assert_eq!(non_ascii_count("\u{7f}"), 0);
        assert_eq!(non_ascii_count("\u{80}"), 1);
    }
}
