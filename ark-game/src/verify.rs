//! Translation checking.
//!
//! Player input is compared against a puzzle's accepted answers after
//! lowercasing and dropping everything that is not `a`-`z` or a space.

use once_cell::sync::Lazy;
use regex::Regex;

static NOT_LETTER_OR_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^a-z ]").expect("static pattern is valid"));

/// Lowercase `raw` and strip every character outside `[a-z ]`.
///
/// Whitespace is not collapsed or trimmed; accented letters are removed
/// rather than folded.
#[must_use]
pub fn normalize(raw: &str) -> String {
    NOT_LETTER_OR_SPACE
        .replace_all(&raw.to_lowercase(), "")
        .into_owned()
}

/// Returns true when the normalized input equals one of `accepted` exactly.
///
/// Accepted answers are expected to already be in normalized form.
#[must_use]
pub fn verify<S: AsRef<str>>(raw: &str, accepted: &[S]) -> bool {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return false;
    }
    accepted
        .iter()
        .any(|answer| answer.as_ref() == normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: [&str; 1] = ["tell me a story about your home"];

    #[test]
    fn ignores_case_and_punctuation() {
        assert!(verify("Tell Me A Story, About Your Home!", &HOME));
        assert!(verify("tell me a story about your home", &HOME));
    }

    #[test]
    fn keeps_whitespace_as_typed() {
        assert!(!verify("tell me a  story about your home", &HOME));
        assert!(!verify(" tell me a story about your home", &HOME));
    }

    #[test]
    fn strips_digits_and_accents() {
        assert_eq!(normalize("Caffè 42 ok?"), "caff  ok");
        assert_eq!(normalize("ÀÉÎ"), "");
    }

    #[test]
    fn empty_input_never_matches() {
        assert!(!verify("", &HOME));
        assert!(!verify("?!.", &[""]));
    }

    #[test]
    fn any_accepted_variant_matches() {
        let accepted = ["we dance to stay warm", "we dance for warmth"];
        assert!(verify("We dance for warmth.", &accepted));
        assert!(!verify("we dance", &accepted));
    }

    #[test]
    fn no_fuzzy_matching() {
        assert!(!verify("tell me a story about your hom", &HOME));
    }
}
