//! Historical guess/feedback pairs

use super::{Pattern, PatternError, Word, WordError};
use std::fmt;

/// Maximum number of constraints in a game (one per turn)
pub const MAX_CONSTRAINTS: usize = 6;

/// An observed move: the word that was guessed and the feedback it received
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constraint {
    pub guess: Word,
    pub pattern: Pattern,
}

/// Error returned when parsing a `guess:pattern` string fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    MissingSeparator,
    Word(WordError),
    Pattern(PatternError),
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => {
                write!(f, "Constraint must look like guess:pattern (e.g. crane:01200)")
            }
            Self::Word(e) => write!(f, "Invalid guess: {e}"),
            Self::Pattern(e) => write!(f, "Invalid pattern: {e}"),
        }
    }
}

impl std::error::Error for ConstraintError {}

impl Constraint {
    #[must_use]
    pub const fn new(guess: Word, pattern: Pattern) -> Self {
        Self { guess, pattern }
    }

    /// The constraint a guess would produce against a known secret
    #[must_use]
    pub fn observed(secret: &Word, guess: Word) -> Self {
        Self::new(guess, Pattern::calculate(secret, &guess))
    }

    /// Parse `guess:pattern` (a space or `=` also works as the separator)
    ///
    /// # Errors
    /// Returns `ConstraintError` if the separator is missing or either half is invalid.
    ///
    /// # Examples
    /// ```
    /// use wordle_prover::core::Constraint;
    ///
    /// let c = Constraint::parse("crane:0120G").unwrap();
    /// assert_eq!(c.guess.text(), "crane");
    /// assert_eq!(c.pattern.digits(), [0, 1, 2, 0, 2]);
    /// ```
    pub fn parse(s: &str) -> Result<Self, ConstraintError> {
        let s = s.trim();
        let (guess, pattern) = s
            .split_once([':', '='])
            .or_else(|| s.split_once(char::is_whitespace))
            .ok_or(ConstraintError::MissingSeparator)?;

        let guess = Word::new(guess.trim()).map_err(ConstraintError::Word)?;
        let pattern = Pattern::parse(pattern.trim()).map_err(ConstraintError::Pattern)?;

        Ok(Self::new(guess, pattern))
    }
}

impl std::str::FromStr for Constraint {
    type Err = ConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.guess, self.pattern)
    }
}
