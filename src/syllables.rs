const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Vowel-group starts, minus one for a trailing `e`, at least 1.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();

    let mut count = 0usize;
    let mut previous_was_vowel = false;
    for c in word.chars() {
        let is_vowel = VOWELS.contains(&c);
        if is_vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = is_vowel;
    }

    if word.ends_with('e') {
        count = count.saturating_sub(1);
    }

    count.max(1)
}

/// Total syllables over whitespace tokens, punctuation and all.
pub fn total_syllables<'a>(tokens: impl IntoIterator<Item = &'a str>) -> usize {
    tokens.into_iter().map(count_syllables).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_words() {
        assert_eq!(count_syllables("the"), 1);
        assert_eq!(count_syllables("banana"), 3);
        assert_eq!(count_syllables("rate"), 1);
        assert_eq!(count_syllables("Readability"), 5);
    }

    #[test]
    fn floor_is_one() {
        assert_eq!(count_syllables(""), 1);
        assert_eq!(count_syllables("--"), 1);
        assert_eq!(count_syllables("e"), 1);
    }

    #[test]
    fn trailing_punctuation_defeats_silent_e() {
        assert_eq!(count_syllables("rate."), 2);
    }

    #[test]
    fn y_is_a_vowel() {
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("yearly"), 2);
    }
}
