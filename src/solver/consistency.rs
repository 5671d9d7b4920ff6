//! Consistency of candidate targets with observed feedback
//!
//! For a guess and the feedback it produced against a hypothetical target,
//! decides which candidate targets could still be the secret. Evaluating
//! every (guess, hypothetical, candidate) triple of a block yields a
//! [`ConsistencyTensor`].

use crate::core::{Feedback, FeedbackRule, LetterSet, Word};

/// Feedback of one guess against one hypothetical target, compiled into checks
///
/// The buffers are reused across [`Constraint::compile`] calls so the hot
/// loop does not allocate.
#[derive(Debug, Clone, Default)]
pub struct Constraint {
    rule: FeedbackRule,
    marks: Vec<Feedback>,
    scratch: Vec<Feedback>,
    /// (position, letter) that must match exactly
    correct: Vec<(usize, u8)>,
    /// (position, letter) that must occur somewhere other than position
    present: Vec<(usize, u8)>,
    /// Letters that must not occur at all
    absent: LetterSet,
}

impl Constraint {
    #[must_use]
    pub fn new(rule: FeedbackRule) -> Self {
        Self {
            rule,
            ..Self::default()
        }
    }

    /// Derive the feedback of `guess` against `hypothetical` and prepare the checks
    pub fn compile(&mut self, guess: &Word, hypothetical: &Word) {
        self.marks.clear();
        self.marks.resize(guess.len(), Feedback::Absent);
        self.rule.classify_into(guess, hypothetical, &mut self.marks);

        if self.rule == FeedbackRule::Exact {
            self.scratch.resize(guess.len(), Feedback::Absent);
            return;
        }

        self.correct.clear();
        self.present.clear();
        self.absent = LetterSet::EMPTY;
        for (p, &mark) in self.marks.iter().enumerate() {
            let letter = guess.code_at(p);
            match mark {
                Feedback::Correct => self.correct.push((p, letter)),
                Feedback::Present => self.present.push((p, letter)),
                Feedback::Absent => self.absent.insert(letter),
            }
        }
    }

    /// Marks derived by the last [`Self::compile`]
    #[must_use]
    pub fn marks(&self) -> &[Feedback] {
        &self.marks
    }

    /// Could `candidate` be the secret given the compiled feedback for `guess`?
    ///
    /// Loose rule, per guess position:
    /// - Correct: the candidate has the same letter there
    /// - Absent: the candidate does not contain the letter at all
    /// - Present: the candidate contains the letter at some other position
    ///
    /// Exact rule: the candidate reproduces the same marks.
    pub fn admits(&mut self, guess: &Word, candidate: &Word) -> bool {
        match self.rule {
            FeedbackRule::Loose => {
                !candidate.letters().intersects(self.absent)
                    && self
                        .correct
                        .iter()
                        .all(|&(p, letter)| candidate.code_at(p) == letter)
                    && self
                        .present
                        .iter()
                        .all(|&(p, letter)| candidate.has_letter_elsewhere(letter, p))
            }
            FeedbackRule::Exact => {
                self.rule.classify_into(guess, candidate, &mut self.scratch);
                self.scratch == self.marks
            }
        }
    }
}

/// Is `candidate` consistent with the feedback `guess` gets against `hypothetical`?
#[must_use]
pub fn is_consistent(
    rule: FeedbackRule,
    guess: &Word,
    hypothetical: &Word,
    candidate: &Word,
) -> bool {
    let mut constraint = Constraint::new(rule);
    constraint.compile(guess, hypothetical);
    constraint.admits(guess, candidate)
}

/// Dense guess × hypothetical × candidate satisfaction block
///
/// Cell `(g, h, c)` is true when candidate `c` stays possible after guess `g`
/// if the secret were hypothetical `h`. Indices are block-local.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistencyTensor {
    guesses: usize,
    hypotheticals: usize,
    candidates: usize,
    cells: Vec<bool>,
}

impl ConsistencyTensor {
    /// Evaluate every triple of the given blocks
    #[must_use]
    pub fn evaluate(
        rule: FeedbackRule,
        guesses: &[Word],
        hypotheticals: &[Word],
        candidates: &[Word],
    ) -> Self {
        let mut cells = Vec::with_capacity(guesses.len() * hypotheticals.len() * candidates.len());
        let mut constraint = Constraint::new(rule);

        for guess in guesses {
            for hypothetical in hypotheticals {
                constraint.compile(guess, hypothetical);
                cells.extend(
                    candidates
                        .iter()
                        .map(|candidate| constraint.admits(guess, candidate)),
                );
            }
        }

        Self {
            guesses: guesses.len(),
            hypotheticals: hypotheticals.len(),
            candidates: candidates.len(),
            cells,
        }
    }

    /// (guesses, hypotheticals, candidates)
    #[must_use]
    pub const fn shape(&self) -> (usize, usize, usize) {
        (self.guesses, self.hypotheticals, self.candidates)
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// # Panics
    /// Panics if any index is out of range
    #[must_use]
    pub fn get(&self, guess: usize, hypothetical: usize, candidate: usize) -> bool {
        assert!(
            guess < self.guesses && hypothetical < self.hypotheticals && candidate < self.candidates,
            "tensor index out of range"
        );
        self.cells[(guess * self.hypotheticals + hypothetical) * self.candidates + candidate]
    }

    /// Add the number of consistent candidates of every (guess, hypothetical)
    /// pair into `counts`, laid out row-major as `guess * hypotheticals + hypothetical`
    ///
    /// # Panics
    /// Panics if `counts` does not have one slot per pair
    pub fn accumulate_sat_counts(&self, counts: &mut [u64]) {
        assert_eq!(counts.len(), self.guesses * self.hypotheticals);
        if self.candidates == 0 {
            return;
        }
        for (slot, row) in counts.iter_mut().zip(self.cells.chunks_exact(self.candidates)) {
            *slot += row.iter().filter(|&&ok| ok).count() as u64;
        }
    }
}
