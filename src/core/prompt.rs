use crate::utils::error::{Result, SpokeError};
use std::str::FromStr;

/// Numbers the prompts accept.
pub trait NumericInput: FromStr + Copy {
    fn is_usable(&self) -> bool {
        true
    }
}

impl NumericInput for f64 {
    fn is_usable(&self) -> bool {
        self.is_finite()
    }
}

impl NumericInput for u32 {}

/// Strict parse of a prompt answer; surrounding whitespace is ignored.
pub fn parse_number<T: NumericInput>(field: &str, raw: &str) -> Result<T> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| SpokeError::InvalidInput {
        field: field.to_string(),
        value: trimmed.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("empty answer"));
    }
    let value: T = trimmed.parse().map_err(|_| invalid("not a number"))?;
    if !value.is_usable() {
        return Err(invalid("not a finite number"));
    }
    Ok(value)
}

/// Blank answers take the default silently; unparseable ones take it with a warning.
pub fn parse_with_default<T: NumericInput>(field: &str, raw: &str, default: T) -> T {
    if raw.trim().is_empty() {
        return default;
    }
    match parse_number(field, raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("{}; using the default", e);
            default
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub const OPTIONS: [(&'static str, YesNo); 2] = [("Y", YesNo::Yes), ("N", YesNo::No)];

    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }
}

/// Looks the answer up as typed, then lowercased, then uppercased.
pub fn match_choice<T: Copy>(answer: &str, options: &[(&str, T)]) -> Option<T> {
    let answer = answer.trim();
    let lookup = |key: &str| {
        options
            .iter()
            .find(|(option, _)| *option == key)
            .map(|(_, value)| *value)
    };
    lookup(answer)
        .or_else(|| lookup(&answer.to_lowercase()))
        .or_else(|| lookup(&answer.to_uppercase()))
}

pub fn yes_or_no_prompt(question: &str) -> String {
    format!("{} [Y / N]: ", question)
}
