//! Splits SVG path data into command letters and numbers.

use crate::error::{OutlineError, Result};
use crate::geometry::limits;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Command(char),
    Number(f64),
}

/// Tokenize a path `d` string.
///
/// Separators and any other non-letter characters are dropped. Every ASCII
/// letter outside a number becomes a [`Token::Command`], so unknown letters
/// are left for the interpreter to reject.
pub fn tokenize(d: &str) -> Result<Vec<Token>> {
    if d.len() > limits::MAX_PATH_CHARS {
        return Err(OutlineError::PathTooLong { len: d.len() });
    }
    let bytes = d.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0usize;
    while i < bytes.len() {
        let c = bytes[i];
        if let Some(end) = scan_number(bytes, i) {
            tokens.push(Token::Number(parse_num(&d[i..end])?));
            i = end;
        } else if c.is_ascii_alphabetic() {
            tokens.push(Token::Command(c as char));
            i += 1;
        } else {
            i += 1;
        }
    }
    Ok(tokens)
}

fn parse_num(literal: &str) -> Result<f64> {
    match literal.parse::<f64>() {
        Ok(v) if limits::in_coord_bounds(v) => Ok(v),
        _ => Err(OutlineError::MalformedNumber {
            literal: literal.to_string(),
        }),
    }
}

fn digits(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

// Returns the end of a numeric literal starting at `start`, if one does.
fn scan_number(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start;
    if i < bytes.len() && (bytes[i] == b'-' || bytes[i] == b'+') {
        i += 1;
    }
    let int_end = digits(bytes, i);
    let had_int = int_end > i;
    i = int_end;
    let mut had_frac = false;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_end = digits(bytes, i + 1);
        had_frac = frac_end > i + 1;
        if had_int || had_frac {
            i = frac_end;
        }
    }
    if !had_int && !had_frac {
        return None;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'-' || bytes[j] == b'+') {
            j += 1;
        }
        let exp_end = digits(bytes, j);
        if exp_end > j {
            i = exp_end;
        }
    }
    Some(i)
}
