//! Feedback classification for a guess against a target
//!
//! Each guess position receives one of three marks:
//! - Correct: same letter at the same position
//! - Present: letter occurs elsewhere in the target
//! - Absent: otherwise
//!
//! How repeated letters count toward Present depends on the [`FeedbackRule`].

use super::Word;
use super::alphabet::MAX_LETTERS;
use std::fmt;

/// Mark for a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

impl Feedback {
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// How repeated guess letters are matched against the target
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FeedbackRule {
    /// A non-matching guess letter is Present whenever the target contains it
    /// anywhere, however many times the guess repeats it
    #[default]
    Loose,
    /// Game rules: each target letter satisfies at most one guess letter,
    /// correct positions first, then left to right
    Exact,
}

impl FeedbackRule {
    /// Classify `guess` against `target`, writing one mark per position into `out`
    ///
    /// # Panics
    /// Panics if `out`, `guess` and `target` differ in length
    pub fn classify_into(self, guess: &Word, target: &Word, out: &mut [Feedback]) {
        assert_eq!(guess.len(), target.len(), "guess and target lengths differ");
        assert_eq!(out.len(), guess.len(), "output buffer length differs");

        match self {
            Self::Loose => {
                for (p, mark) in out.iter_mut().enumerate() {
                    let letter = guess.code_at(p);
                    *mark = if letter == target.code_at(p) {
                        Feedback::Correct
                    } else if target.has_letter(letter) {
                        Feedback::Present
                    } else {
                        Feedback::Absent
                    };
                }
            }
            Self::Exact => {
                let mut available = [0usize; MAX_LETTERS];

                // First pass: greens, and pool the unmatched target letters
                for (p, mark) in out.iter_mut().enumerate() {
                    if guess.code_at(p) == target.code_at(p) {
                        *mark = Feedback::Correct;
                    } else {
                        *mark = Feedback::Absent;
                        available[usize::from(target.code_at(p))] += 1;
                    }
                }

                // Second pass: yellows from what is left
                for (p, mark) in out.iter_mut().enumerate() {
                    if *mark == Feedback::Absent {
                        let slot = &mut available[usize::from(guess.code_at(p))];
                        if *slot > 0 {
                            *mark = Feedback::Present;
                            *slot -= 1;
                        }
                    }
                }
            }
        }
    }

    /// Classify `guess` against `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_ranker::core::{Alphabet, FeedbackPattern, FeedbackRule, Word};
    ///
    /// let alphabet = Alphabet::from_words(["aa", "ab"]).unwrap();
    /// let guess = Word::encode("aa", &alphabet, 2).unwrap();
    /// let target = Word::encode("ab", &alphabet, 2).unwrap();
    ///
    /// let loose = FeedbackRule::Loose.classify(&guess, &target);
    /// assert_eq!(loose, "GY".parse::<FeedbackPattern>().unwrap());
    ///
    /// let exact = FeedbackRule::Exact.classify(&guess, &target);
    /// assert_eq!(exact, "G-".parse::<FeedbackPattern>().unwrap());
    /// ```
    #[must_use]
    pub fn classify(self, guess: &Word, target: &Word) -> FeedbackPattern {
        let mut marks = vec![Feedback::Absent; guess.len()];
        self.classify_into(guess, target, &mut marks);
        FeedbackPattern(marks)
    }
}

/// Marks for every position of a guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackPattern(Vec<Feedback>);

impl FeedbackPattern {
    #[must_use]
    pub fn new(marks: Vec<Feedback>) -> Self {
        Self(marks)
    }

    #[must_use]
    pub fn marks(&self) -> &[Feedback] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All positions Correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&mark| mark == Feedback::Correct)
    }

    #[must_use]
    pub fn count(&self, feedback: Feedback) -> usize {
        self.0.iter().filter(|&&mark| mark == feedback).count()
    }

    /// Render as a row of colored squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }
}

/// Parses strings like "GY-GY" or "🟩🟨⬜🟩🟨"
///
/// Accepts 'G'/'g'/🟩 for Correct, 'Y'/'y'/🟨 for Present, '-'/'_'/⬜ for Absent.
impl std::str::FromStr for FeedbackPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Ok(Feedback::Correct),
                'Y' | 'y' | '🟨' => Ok(Feedback::Present),
                '-' | '_' | '⬜' => Ok(Feedback::Absent),
                _ => Err(format!("Invalid pattern string: {s}")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn words(texts: &[&str]) -> Vec<Word> {
        let alphabet = Alphabet::from_words(texts).unwrap();
        texts
            .iter()
            .map(|t| Word::encode(t, &alphabet, t.chars().count()).unwrap())
            .collect()
    }

    fn pattern(s: &str) -> FeedbackPattern {
        s.parse().unwrap()
    }

    #[test]
    fn all_absent() {
        let w = words(&["abcde", "fghij"]);
        for rule in [FeedbackRule::Loose, FeedbackRule::Exact] {
            assert_eq!(rule.classify(&w[0], &w[1]), pattern("-----"));
        }
    }

    #[test]
    fn word_against_itself_is_perfect() {
        let w = words(&["crane", "speed", "aaaaa"]);
        for word in &w {
            for rule in [FeedbackRule::Loose, FeedbackRule::Exact] {
                assert!(rule.classify(word, word).is_perfect());
            }
        }
    }

    #[test]
    fn two_letter_scenario() {
        // aa vs ab: position 1 'a' occurs in "ab" at position 0
        let w = words(&["aa", "ab"]);
        assert_eq!(FeedbackRule::Loose.classify(&w[0], &w[1]), pattern("GY"));
        // the only 'a' of "ab" is already used by the green
        assert_eq!(FeedbackRule::Exact.classify(&w[0], &w[1]), pattern("G-"));
    }

    #[test]
    fn crane_vs_slate() {
        let w = words(&["crane", "slate"]);
        let expected = pattern("--G-G");
        assert_eq!(FeedbackRule::Loose.classify(&w[0], &w[1]), expected);
        assert_eq!(FeedbackRule::Exact.classify(&w[0], &w[1]), expected);
    }

    #[test]
    fn exact_rule_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: first O yellow, second O green
        let w = words(&["robot", "floor"]);
        assert_eq!(FeedbackRule::Exact.classify(&w[0], &w[1]), pattern("YY-G-"));
    }

    #[test]
    fn exact_rule_limits_yellows_to_target_multiplicity() {
        // SPEED vs ABBEY: the single E of ABBEY is taken by the green
        let w = words(&["speed", "abbey"]);
        assert_eq!(FeedbackRule::Exact.classify(&w[0], &w[1]), pattern("---G-"));
        // Loose rule still marks the other E present
        assert_eq!(FeedbackRule::Loose.classify(&w[0], &w[1]), pattern("--YG-"));
    }

    #[test]
    fn exact_rule_speed_vs_erase() {
        let w = words(&["speed", "erase"]);
        let p = FeedbackRule::Exact.classify(&w[0], &w[1]);
        assert_eq!(p, pattern("Y-YY-"));
        assert_eq!(p.count(Feedback::Present), 3);
        assert_eq!(p.count(Feedback::Correct), 0);
    }

    #[test]
    fn exact_rule_handles_letters_repeated_hundreds_of_times() {
        let guess = format!("a{}", "b".repeat(299));
        // 299 unmatched c's pile up in the target pool
        let target = format!("{}a", "c".repeat(299));
        let w = words(&[&guess, &target]);
        let p = FeedbackRule::Exact.classify(&w[0], &w[1]);
        assert_eq!(p.len(), 300);
        assert_eq!(p.count(Feedback::Present), 1);
        assert_eq!(p.count(Feedback::Absent), 299);
    }

    #[test]
    fn parse_accepts_letters_and_emoji() {
        assert_eq!(pattern("GY-gy_"), pattern("🟩🟨⬜🟩🟨⬜"));
        assert!("GXG".parse::<FeedbackPattern>().is_err());
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(pattern("GY-").to_emoji(), "🟩🟨⬜");
        assert_eq!(format!("{}", pattern("G")), "🟩");
    }
}
