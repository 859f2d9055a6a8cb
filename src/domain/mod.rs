use std::error::Error;
use std::fmt;

pub mod fixed;
pub mod goals;
pub mod health;
pub mod record;
pub mod task;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseChoiceError {
    kind: &'static str,
    value: String,
    expected: &'static [&'static str],
}

impl ParseChoiceError {
    pub fn new(kind: &'static str, value: &str, expected: &'static [&'static str]) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

impl fmt::Display for ParseChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid {} '{}': expected one of {}",
            self.kind,
            self.value,
            self.expected.join(", ")
        )
    }
}

impl Error for ParseChoiceError {}

pub(crate) fn fold_choice(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|ch| !matches!(ch, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
