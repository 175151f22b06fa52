//! The numeral decomposer.
//!
//! Converts an integer's decimal digit string into a sequence of digit-word
//! translations. Runs of zeros collapse into a "zero [run length] and"
//! pattern, with the run length itself decomposed recursively; the parts
//! are joined with `-`.
//!
//! The digit words, plus `zero` and `and`, must already be defined in the
//! lexicon (normally as root words) or decomposition fails.

use fira_foundation::{Error, Result};
use fira_store::Lexicon;

use crate::translate::{resolve, Direction};

/// English names for the decimal digits, indexed by digit.
pub const DIGIT_WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// The word emitted between a zero run and the following digit.
const AND_WORD: &str = "and";

/// Decomposes a non-negative integer into its Fira numeral spelling.
///
/// # Errors
///
/// Returns a syntax error if the value is negative or any required digit
/// word is missing from the lexicon.
pub fn decompose(lexicon: &Lexicon, value: i64) -> Result<String> {
    Ok(parts(lexicon, value)?.join("-"))
}

/// Decomposes a value into its unjoined word sequence.
///
/// Recursive calls for zero-run lengths splice their parts into the
/// caller's sequence rather than folding them into one joined word.
fn parts(lexicon: &Lexicon, value: i64) -> Result<Vec<String>> {
    if value < 0 {
        return Err(Error::syntax(format!(
            "DEFNUM ERROR: cannot decompose negative value '{value}'"
        )));
    }

    let digits = value.to_string();
    let mut words = Vec::new();
    let mut zero_run = 0usize;

    for digit in digits.chars() {
        if digit == '0' {
            zero_run += 1;
        } else {
            if zero_run > 0 {
                flush_zero_run(lexicon, &mut words, zero_run)?;
                words.push(fira_word(lexicon, AND_WORD)?);
                zero_run = 0;
            }
            let index = digit as usize - '0' as usize;
            words.push(fira_word(lexicon, DIGIT_WORDS[index])?);
        }
    }
    // Trailing zeros: no following digit, so no "and".
    if zero_run > 0 {
        flush_zero_run(lexicon, &mut words, zero_run)?;
    }

    Ok(words)
}

/// Emits the zero word and, for runs longer than one, the decomposed run
/// length.
fn flush_zero_run(lexicon: &Lexicon, words: &mut Vec<String>, run: usize) -> Result<()> {
    words.push(fira_word(lexicon, DIGIT_WORDS[0])?);
    if run > 1 {
        words.extend(parts(lexicon, run as i64)?);
    }
    Ok(())
}

fn fira_word(lexicon: &Lexicon, gloss: &str) -> Result<String> {
    resolve(lexicon, gloss, Direction::ToFira)
}
