use ark_game::PuzzleId;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A seeded stand-in for a person at the keyboard. Two players built from
/// the same seed make the same choices.
pub struct SimulatedPlayer {
    rng: ChaCha8Rng,
}

impl SimulatedPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Order in which the aliens are visited.
    pub fn visit_order(&mut self) -> Vec<PuzzleId> {
        let mut order = PuzzleId::ALL.to_vec();
        order.shuffle(&mut self.rng);
        order
    }

    pub fn think_seconds(&mut self) -> u32 {
        self.rng.gen_range(1..=90)
    }

    pub fn wrong_attempts(&mut self) -> usize {
        self.rng.gen_range(0..=3)
    }

    pub fn reference_peeks(&mut self) -> u32 {
        self.rng.gen_range(0..=4)
    }

    /// The first few words of `answer`, as typed before the rest.
    pub fn partial(&mut self, answer: &str) -> String {
        let words: Vec<&str> = answer.split_whitespace().collect();
        let keep = self.rng.gen_range(1..words.len().max(2));
        words[..keep.min(words.len())].join(" ")
    }

    /// A near miss: the answer with one word dropped or swapped.
    pub fn wrong_guess(&mut self, answer: &str) -> String {
        let mut words: Vec<&str> = answer.split_whitespace().collect();
        if words.len() < 2 {
            return format!("{answer} not");
        }
        let idx = self.rng.gen_range(0..words.len());
        if self.rng.gen_bool(0.5) {
            words.remove(idx);
        } else {
            words[idx] = "blorp";
        }
        words.join(" ")
    }

    /// The answer with random capitalization and punctuation that
    /// normalization must see through. Spacing is left alone.
    pub fn decorate(&mut self, answer: &str) -> String {
        const MARKS: [&str; 5] = ["", ",", "!", ".", "?"];
        let mut out = String::new();
        for (idx, word) in answer.split_whitespace().enumerate() {
            if idx > 0 {
                out.push(' ');
            }
            if self.rng.gen_bool(0.4) {
                out.push_str(&word.to_uppercase());
            } else {
                out.push_str(word);
            }
            if let Some(mark) = MARKS.choose(&mut self.rng) {
                out.push_str(mark);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_choices() {
        let mut a = SimulatedPlayer::new(7);
        let mut b = SimulatedPlayer::new(7);
        assert_eq!(a.visit_order(), b.visit_order());
        assert_eq!(a.think_seconds(), b.think_seconds());
        assert_eq!(
            a.decorate("we dance to keep warm"),
            b.decorate("we dance to keep warm")
        );
    }

    #[test]
    fn decorated_answers_still_verify() {
        let mut player = SimulatedPlayer::new(1337);
        let answer = "the mist carries our words";
        for _ in 0..50 {
            let typed = player.decorate(answer);
            assert!(ark_game::verify(&typed, &[answer]), "{typed:?}");
        }
    }

    #[test]
    fn wrong_guesses_never_verify() {
        let mut player = SimulatedPlayer::new(42);
        let answer = "our hands speak where air is scarce";
        for _ in 0..50 {
            let typed = player.wrong_guess(answer);
            assert!(!ark_game::verify(&typed, &[answer]), "{typed:?}");
        }
    }

    #[test]
    fn partial_is_a_strict_prefix() {
        let mut player = SimulatedPlayer::new(3);
        let answer = "tell me a story about your home";
        for _ in 0..20 {
            let partial = player.partial(answer);
            assert!(answer.starts_with(&partial));
            assert_ne!(partial, answer);
        }
    }
}
