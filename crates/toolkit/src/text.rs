//! String helpers.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

use crate::error::ToolkitError;

pub const STRING_REQUIRED: &str = "Input must be a string";

/// A maximal run of ASCII word characters.
static WORD_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("valid regex"));

/// Anything that is not a lower-case ASCII letter or digit.
static NON_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]").expect("valid regex"));

fn text(input: impl Into<Value>) -> Result<String, ToolkitError> {
    match input.into() {
        Value::String(s) => Ok(s),
        _ => Err(ToolkitError::InvalidArgument(STRING_REQUIRED)),
    }
}

/// Upper-case the first character of every word, leaving everything else
/// untouched.
pub fn capitalize_words(input: impl Into<Value>) -> Result<String, ToolkitError> {
    let s = text(input)?;
    let capitalized = WORD_RUN_RE.replace_all(&s, |caps: &Captures| {
        let word = &caps[0];
        // The run is ASCII, so the first byte is a whole character.
        let (head, tail) = word.split_at(1);
        format!("{}{}", head.to_ascii_uppercase(), tail)
    });
    Ok(capitalized.into_owned())
}

/// Whether `input` reads the same forwards and backwards once case and
/// everything but ASCII letters and digits are ignored.
pub fn is_palindrome(input: impl Into<Value>) -> Result<bool, ToolkitError> {
    let lowered = text(input)?.to_lowercase();
    let cleaned = NON_ALNUM_RE.replace_all(&lowered, "");
    Ok(cleaned.bytes().eq(cleaned.bytes().rev()))
}
