//! Wordle feedback pattern calculation and representation
//!
//! A pattern is the per-position feedback for a guess:
//! - 0 = Absent (letter not in word, or all instances already consumed)
//! - 1 = Present (letter elsewhere in the word)
//! - 2 = Exact (letter in correct position)
//!
//! The compact form is a [`PatternCode`], the base-3 number read left to right
//! (position 0 is the most significant digit), in the range 0-242.

use super::Word;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum LetterState {
    #[default]
    Absent = 0,
    Present = 1,
    Exact = 2,
}

impl LetterState {
    /// Convert a raw digit (0, 1 or 2)
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Exact),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Next state in the tile-click cycle: absent → present → exact → absent
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Absent => Self::Present,
            Self::Present => Self::Exact,
            Self::Exact => Self::Absent,
        }
    }
}

/// Base-3 encoded pattern, usable as a bucket key
///
/// Value range: 0-242 (3^5 - 1 = 243 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatternCode(u8);

impl PatternCode {
    /// Number of distinct codes
    pub const COUNT: usize = 243;

    /// All exact (perfect match)
    pub const PERFECT: Self = Self(242);

    /// Create a code from a raw value
    ///
    /// # Panics
    /// Panics in debug mode if value >= 243
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(value < 243, "Pattern code must be < 243");
        Self(value)
    }

    /// Get the raw code value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Expand back into a per-position pattern
    #[must_use]
    pub fn decode(self) -> Pattern {
        let mut states = [LetterState::Absent; 5];
        let mut val = self.0;

        for state in states.iter_mut().rev() {
            *state = LetterState::from_digit(val % 3).unwrap_or_default();
            val /= 3;
        }

        Pattern(states)
    }
}

impl fmt::Display for PatternCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when parsing a pattern fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Pattern must have exactly 5 positions, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Invalid pattern symbol '{ch}' (use 0/1/2, -/Y/G or ⬜🟨🟩)")
            }
        }
    }
}

impl std::error::Error for PatternError {}

/// Ordered per-position feedback for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pattern([LetterState; 5]);

impl Pattern {
    /// All exact
    pub const PERFECT: Self = Self([LetterState::Exact; 5]);

    #[must_use]
    pub const fn from_states(states: [LetterState; 5]) -> Self {
        Self(states)
    }

    /// Build from raw digits; `None` unless there are exactly five digits in {0,1,2}
    #[must_use]
    pub fn from_digits(digits: &[u8]) -> Option<Self> {
        let digits: &[u8; 5] = digits.try_into().ok()?;
        let mut states = [LetterState::Absent; 5];
        for (state, &digit) in states.iter_mut().zip(digits) {
            *state = LetterState::from_digit(digit)?;
        }
        Some(Self(states))
    }

    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; 5] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn digits(&self) -> [u8; 5] {
        self.0.map(LetterState::digit)
    }

    /// Replace the state at one position
    pub fn set(&mut self, position: usize, state: LetterState) {
        if let Some(slot) = self.0.get_mut(position) {
            *slot = state;
        }
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Implements Wordle's duplicate-letter rules exactly:
    /// 1. Mark exact position matches and consume those secret positions
    /// 2. For each remaining guess position, consume the first unused secret
    ///    position (ascending index) holding the same letter and mark it present
    ///
    /// # Examples
    /// ```
    /// use wordle_prover::core::{Pattern, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let guess = Word::new("arose").unwrap();
    ///
    /// // A(present) R(exact) O(absent) S(absent) E(exact)
    /// assert_eq!(Pattern::calculate(&secret, &guess).digits(), [1, 2, 0, 0, 2]);
    /// ```
    #[must_use]
    // Allow: Index needed to pair secret[i], guess[i], result[i] and used[j]
    #[allow(clippy::needless_range_loop)]
    pub fn calculate(secret: &Word, guess: &Word) -> Self {
        let secret = secret.chars();
        let guess = guess.chars();
        let mut result = [LetterState::Absent; 5];
        let mut used = [false; 5];

        for i in 0..5 {
            if secret[i] == guess[i] {
                result[i] = LetterState::Exact;
                used[i] = true;
            }
        }

        for i in 0..5 {
            if result[i] == LetterState::Exact {
                continue;
            }
            let letter = guess[i];
            if let Some(j) = (0..5).find(|&j| !used[j] && secret[j] == letter) {
                result[i] = LetterState::Present;
                used[j] = true;
            }
        }

        Self(result)
    }

    /// Encode as a base-3 number, position 0 most significant
    #[must_use]
    pub fn code(&self) -> PatternCode {
        PatternCode(self.0.iter().fold(0, |code, state| code * 3 + state.digit()))
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterState::Exact).count()
    }

    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterState::Present).count()
    }

    /// Parse a pattern from a string like "01200", "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - '2'/'G'/'g'/🟩 for exact
    /// - '1'/'Y'/'y'/🟨 for present
    /// - '0'/'-'/'_'/'.'/⬜/⬛ for absent
    ///
    /// # Errors
    /// Returns `PatternError` on a wrong position count or an unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_prover::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// let p3 = Pattern::parse("21021").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1, p3);
    /// ```
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != 5 {
            return Err(PatternError::InvalidLength(chars.len()));
        }

        let mut states = [LetterState::Absent; 5];
        for (state, ch) in states.iter_mut().zip(chars) {
            *state = match ch {
                '2' | 'G' | 'g' | '🟩' => LetterState::Exact,
                '1' | 'Y' | 'y' | '🟨' => LetterState::Present,
                '0' | '-' | '_' | '.' | '⬜' | '⬛' => LetterState::Absent,
                other => return Err(PatternError::InvalidSymbol(other)),
            };
        }

        Ok(Self(states))
    }

    /// Convert pattern to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|state| match state {
                LetterState::Exact => '🟩',
                LetterState::Present => '🟨',
                LetterState::Absent => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(secret: &str, guess: &str) -> [u8; 5] {
        let secret = Word::new(secret).unwrap();
        let guess = Word::new(guess).unwrap();
        Pattern::calculate(&secret, &guess).digits()
    }

    #[test]
    fn hand_computed_reference_table() {
        // (secret, guess, expected)
        let table: [(&str, &str, [u8; 5]); 8] = [
            ("crane", "arose", [1, 2, 0, 0, 2]),
            ("slate", "crane", [0, 0, 2, 0, 2]),
            ("crane", "crane", [2, 2, 2, 2, 2]),
            ("fghij", "abcde", [0, 0, 0, 0, 0]),
            // doubled letter in the guess, single in the secret
            ("erase", "speed", [1, 0, 1, 1, 0]),
            ("abbey", "kebab", [0, 1, 2, 1, 1]),
            // doubled letter in the secret
            ("floor", "robot", [1, 1, 0, 2, 0]),
            ("sassy", "abyss", [1, 0, 1, 2, 1]),
        ];

        for (secret, guess, expected) in table {
            assert_eq!(
                feedback(secret, guess),
                expected,
                "secret={secret} guess={guess}"
            );
        }
    }

    #[test]
    fn repeated_guess_letter_consumes_secret_once() {
        // One 'e' in the secret: only the first unmatched guess 'e' is present
        assert_eq!(feedback("crane", "eerie"), [0, 0, 1, 0, 2]);
        assert_eq!(feedback("hello", "lllll"), [0, 0, 2, 2, 0]);
    }

    #[test]
    fn exact_count_matches_positional_equality() {
        let words = ["sassy", "abyss", "speed", "erase", "robot", "floor", "llama"];
        for secret in words {
            for guess in words {
                let s = Word::new(secret).unwrap();
                let g = Word::new(guess).unwrap();
                let positional = (0..5).filter(|&i| s.char_at(i) == g.char_at(i)).count();
                let pattern = Pattern::calculate(&s, &g);
                assert_eq!(pattern.count_exact(), positional);
            }
        }
    }

    #[test]
    fn non_absent_never_exceeds_shared_letters() {
        // "sassy" holds three 's'; "abyss" asks for two, so at most two 's' marks
        let pattern = Pattern::calculate(&Word::new("sassy").unwrap(), &Word::new("abyss").unwrap());
        let marked = pattern.count_exact() + pattern.count_present();
        assert_eq!(marked, 4); // a, y, s, s
    }

    #[test]
    fn code_is_horner_left_to_right() {
        let pattern = Pattern::from_digits(&[1, 2, 0, 0, 2]).unwrap();
        // 1*81 + 2*27 + 0*9 + 0*3 + 2
        assert_eq!(pattern.code().value(), 137);
        assert_eq!(Pattern::PERFECT.code(), PatternCode::PERFECT);
        assert_eq!(Pattern::default().code().value(), 0);
    }

    #[test]
    fn decode_inverts_encode_over_all_codes() {
        for value in 0..243u8 {
            let code = PatternCode::new(value);
            assert_eq!(code.decode().code(), code);
        }
    }

    #[test]
    fn from_digits_rejects_bad_input() {
        assert!(Pattern::from_digits(&[0, 1, 2, 0]).is_none());
        assert!(Pattern::from_digits(&[0, 1, 2, 0, 3]).is_none());
        assert!(Pattern::from_digits(&[0, 1, 2, 0, 1, 2]).is_none());
    }

    #[test]
    fn parse_valid() {
        let p1 = Pattern::parse("GYG--").unwrap();
        let p2 = Pattern::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Pattern::parse("gyg__").unwrap();
        let p4 = Pattern::parse("21200").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, p4);
        assert_eq!(p1.to_string(), "21200");
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(
            Pattern::parse("GYGGYX"),
            Err(PatternError::InvalidLength(6))
        );
        assert_eq!(Pattern::parse("GYG"), Err(PatternError::InvalidLength(3)));
        assert_eq!(
            Pattern::parse("GXGGY"),
            Err(PatternError::InvalidSymbol('X'))
        );
        assert_eq!(Pattern::parse(""), Err(PatternError::InvalidLength(0)));
    }

    #[test]
    fn cycle_wraps_around() {
        let start = LetterState::Absent;
        assert_eq!(start.cycle(), LetterState::Present);
        assert_eq!(start.cycle().cycle(), LetterState::Exact);
        assert_eq!(start.cycle().cycle().cycle(), LetterState::Absent);
    }

    #[test]
    fn emoji_rendering() {
        let pattern = Pattern::parse("GY-GY").unwrap();
        assert_eq!(pattern.to_emoji(), "🟩🟨⬜🟩🟨");
    }

    #[test]
    fn word_against_itself_is_perfect() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert!(Pattern::calculate(&w, &w).is_perfect());
        }
    }
}
