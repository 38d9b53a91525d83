//! Calibration value extraction for day 1.
//!
//! A calibration value is the two-digit number formed by the first and last
//! digit of a line, where the full scan also counts the spelled-out digits
//! `"one"` through `"nine"`. Matches are ranked by the byte position where
//! they start, not by scan order, so `"xtwone3four"` is 24 and not whatever
//! the word table happens to hit first.

#[cfg(test)]
mod tests;

use memchr::memmem;
use thiserror::Error;

/// Spelled-out digits recognized by the full scan. There is no `"zero"`.
const WORDS: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

/// Errors raised while extracting a calibration value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The line contains neither a digit nor a spelled-out digit.
    #[error("no digit or number word in line")]
    NoDigits,
}

/// A digit found in a line, at the byte position where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub at: usize,
    pub value: u32,
}

/// Extract the calibration value of a line from literal digits only.
///
/// This is the part 1 rule. A line holding a single digit is its own first
/// and last digit, so `"treb7uchet"` is 77.
pub fn extract_digits(line: &str) -> Result<u32, Error> {
    combine(digit_occurrences(line))
}

/// Extract the calibration value of a line from digits and number words.
///
/// This is the part 2 rule. Words may overlap: `"oneight"` holds both a 1
/// and an 8, and the 8 wins the last position.
pub fn extract(line: &str) -> Result<u32, Error> {
    combine(digit_occurrences(line).chain(word_occurrences(line)))
}

/// Every ASCII digit in the line.
pub fn digit_occurrences(line: &str) -> impl Iterator<Item = Occurrence> + '_ {
    line.bytes().enumerate().filter_map(|(at, b)| {
        b.is_ascii_digit().then(|| Occurrence {
            at,
            value: u32::from(b - b'0'),
        })
    })
}

/// Every spelled-out digit in the line, at every position it occurs.
pub fn word_occurrences(line: &str) -> impl Iterator<Item = Occurrence> + '_ {
    WORDS.iter().flat_map(move |&(word, value)| {
        memmem::find_iter(line.as_bytes(), word).map(move |at| Occurrence { at, value })
    })
}

/// Combine the earliest and latest occurrence into a two-digit value.
fn combine<I>(occurrences: I) -> Result<u32, Error>
where
    I: Iterator<Item = Occurrence>,
{
    let occurrences = occurrences.collect::<Vec<_>>();

    let first = occurrences.iter().min_by_key(|o| o.at).ok_or(Error::NoDigits)?;
    let last = occurrences.iter().max_by_key(|o| o.at).ok_or(Error::NoDigits)?;

    Ok(first.value * 10 + last.value)
}
