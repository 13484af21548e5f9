//! Similarity scoring for typed translations.
//!
//! Inputs mix Latin and Persian script, so everything here works over
//! Unicode scalar values rather than bytes.

/// Calculate Levenshtein distance between two strings, codepoint-wise.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Use two rows instead of the full matrix for memory efficiency
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Score a typed translation against the reference answer.
///
/// Both strings are trimmed and lowercased before comparison. The result is
/// an integer percentage in 0..=100: 100 for an exact normalized match, 0 for
/// empty input, otherwise `round((1 - distance / max_len) * 100)` with
/// lengths counted in codepoints.
pub fn similarity_score(user_input: &str, reference: &str) -> u8 {
    let input = user_input.trim().to_lowercase();
    let answer = reference.trim().to_lowercase();

    if input == answer {
        return 100;
    }

    if input.is_empty() {
        return 0;
    }

    let max_len = input.chars().count().max(answer.chars().count());
    let distance = levenshtein_distance(&input, &answer);

    let score = (1.0 - distance as f64 / max_len as f64) * 100.0;
    score.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("saturday", "sunday"), 3);
    }

    #[test]
    fn test_levenshtein_distance_persian() {
        assert_eq!(levenshtein_distance("سلام", "سلام"), 0);
        assert_eq!(levenshtein_distance("سلام", "سلامت"), 1);
    }

    #[test]
    fn test_exact_match_is_100() {
        assert_eq!(similarity_score("hello", "hello"), 100);
        assert_eq!(
            similarity_score("Hello, how are you?", "hello, how are you?"),
            100
        );
        assert_eq!(similarity_score("  hello  ", "hello"), 100);
    }

    #[test]
    fn test_empty_input_is_0() {
        assert_eq!(similarity_score("", "hello"), 0);
        assert_eq!(similarity_score("   ", "hello"), 0);
    }

    #[test]
    fn test_both_empty_is_100() {
        assert_eq!(similarity_score("", ""), 100);
    }

    #[test]
    fn test_one_edit_in_five() {
        // distance 1, max length 5 -> round((1 - 1/5) * 100) = 80
        assert_eq!(similarity_score("a cat", "a bat"), 80);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("a cat", "a bat"),
            ("kitten", "sitting"),
            ("سلام", "سلامت"),
            ("hello world", "goodbye"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity_score(a, b), similarity_score(b, a));
        }
    }

    #[test]
    fn test_persian_scored_in_codepoints() {
        // One substitution over four codepoints, not over the byte lengths.
        assert_eq!(similarity_score("سلام", "سلاح"), 75);
    }

    #[test]
    fn test_disjoint_strings_floor_at_zero() {
        assert_eq!(similarity_score("abc", "xyz"), 0);
    }
}
