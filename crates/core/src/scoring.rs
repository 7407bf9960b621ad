//! Scoring module - word points and the elapsed-time display

use crate::types::POINTS_PER_LETTER;

/// Points for finding `word`: 15 per letter.
///
/// # Examples
///
/// ```
/// use word_search_core::scoring::word_score;
///
/// assert_eq!(word_score("TREE"), 60);
/// assert_eq!(word_score("SCORPION"), 120);
/// ```
pub fn word_score(word: &str) -> u32 {
    (word.len() as u32).saturating_mul(POINTS_PER_LETTER)
}

/// Format elapsed seconds as `MM:SS`.
///
/// Minutes are not capped at 59; an hour shows as `60:00`.
///
/// # Examples
///
/// ```
/// use word_search_core::scoring::format_time;
///
/// assert_eq!(format_time(0), "00:00");
/// assert_eq!(format_time(75), "01:15");
/// ```
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_score() {
        assert_eq!(word_score(""), 0);
        assert_eq!(word_score("MOSS"), 4 * 15);
        assert_eq!(word_score("GLACIER"), 7 * 15);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(60), "01:00");
        assert_eq!(format_time(3599), "59:59");
        assert_eq!(format_time(3600), "60:00");
    }
}
