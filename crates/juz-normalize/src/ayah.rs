//! Verse reference parsing.
//!
//! Turns the raw `answer.ayah` value into an explicit list of verse numbers.
//! Text references are scanned for digit runs; a dash between the first two
//! numbers expands into an inclusive range. Decimal digits from any script
//! are read as their ASCII value.

use std::sync::LazyLock;

use juz_model::VerseReference;
use regex::Regex;

use crate::error::AyahError;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid digit run regex"));

static DECIMAL_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Nd}$").expect("Invalid decimal digit regex"));

/// Verses in the longest surah (Al-Baqarah); no range can span more.
pub const MAX_AYAH: u32 = 286;

/// Separator every dash variant is folded to.
const RANGE_DASH: char = '-';

/// Parse a verse reference into verse numbers.
///
/// Order and duplicates are kept exactly as produced; nothing is sorted.
pub fn parse_ayahs(reference: &VerseReference) -> Result<Vec<u32>, AyahError> {
    match reference {
        VerseReference::Integer(number) => Ok(vec![*number]),
        VerseReference::IntegerList(numbers) => Ok(numbers.clone()),
        VerseReference::Text(text) => parse_ayah_text(text),
    }
}

/// Parse a free-text verse reference such as `"84-85"` or `"12, 14"`.
///
/// A decreasing pair (`"85-84"`) is returned as written rather than expanded.
/// A range covering more than [`MAX_AYAH`] verses is rejected.
pub fn parse_ayah_text(text: &str) -> Result<Vec<u32>, AyahError> {
    let folded = fold_separators_and_digits(text);
    let numbers = DIGIT_RUN
        .find_iter(&folded)
        .map(|run| {
            run.as_str()
                .parse::<u32>()
                .map_err(|_| AyahError::Overflow {
                    digits: run.as_str().to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if folded.contains(RANGE_DASH) && numbers.len() >= 2 {
        let (start, end) = (numbers[0], numbers[1]);
        if end >= start {
            if end - start >= MAX_AYAH {
                return Err(AyahError::RangeTooLarge { start, end });
            }
            return Ok((start..=end).collect());
        }
    }
    Ok(numbers)
}

/// Fold en/em dashes to `-` and non-ASCII decimal digits to ASCII.
fn fold_separators_and_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2013}' | '\u{2014}' => RANGE_DASH,
            _ => ascii_digit(c).unwrap_or(c),
        })
        .collect()
}

fn ascii_digit(c: char) -> Option<char> {
    if c.is_ascii() || !is_decimal_digit(c) {
        return None;
    }
    // Every script's digits form contiguous runs of ten starting at zero,
    // so the value is the distance from the start of the run, modulo ten.
    let code = u32::from(c);
    let preceding = (1..=code)
        .take_while(|back| char::from_u32(code - back).is_some_and(is_decimal_digit))
        .count();
    let value = u32::try_from(preceding % 10).ok()?;
    char::from_digit(value, 10)
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}
