use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref STRIP: Regex = Regex::new(r"(?u)[^\w\s]").expect("valid regex");
}

/// Tokenize text into unigrams followed by bigrams and trigrams.
///
/// The input is NFKC-normalized, lowercased, and stripped of every character
/// that is not a word character or whitespace. Unigrams come first in text
/// order, then every contiguous two-word window, then every three-word
/// window, each joined by a single space. Inputs with fewer than n words
/// produce no n-grams for that n.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    let cleaned = STRIP.replace_all(&normalized, "");
    let words: Vec<&str> = cleaned.split_whitespace().collect();

    let mut terms: Vec<String> = words.iter().map(|w| (*w).to_string()).collect();
    for n in [2usize, 3] {
        for window in words.windows(n) {
            terms.push(window.join(" "));
        }
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("The cat sat.");
        assert_eq!(t, vec!["the", "cat", "sat", "the cat", "cat sat", "the cat sat"]);
    }

    #[test]
    fn punctuation_only_is_empty() {
        assert!(tokenize("?!...").is_empty());
    }
}
