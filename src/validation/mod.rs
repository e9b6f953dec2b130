// src/validation/mod.rs

pub mod input;
pub mod primitives;

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use validator::ValidationErrors;

pub use input::{ListInput, RawInput};

/// A single violated rule, addressed by the input key it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

/// Every violation found while parsing one input, in discovery order.
///
/// Schemas never stop at the first problem; a form can map each entry to
/// its own field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(path, message);
        errors
    }

    pub fn push(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            path: path.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Whether any error is attached to `path`.
    pub fn has(&self, path: &str) -> bool {
        self.0.iter().any(|e| e.path == path)
    }

    pub fn messages_for(&self, path: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|e| e.path == path)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// Folds the outcome of a derived `Validate` check into this list.
    ///
    /// Fields that already carry an error (failed coercion, missing value)
    /// keep only that first message.
    pub fn absorb(&mut self, result: Result<(), ValidationErrors>) {
        self.absorb_with(result, |field| field.to_string());
    }

    /// Like [`absorb`](Self::absorb), renaming each derived field key into
    /// the path the input used for it.
    pub fn absorb_with(
        &mut self,
        result: Result<(), ValidationErrors>,
        rename: impl Fn(&str) -> String,
    ) {
        let Err(errors) = result else {
            return;
        };

        let mut entries: Vec<(String, Vec<String>)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|e| match &e.message {
                        Some(message) => message.to_string(),
                        None => format!("Invalid value ({})", e.code),
                    })
                    .collect();
                (rename(&field.to_string()), messages)
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        for (path, messages) in entries {
            if self.has(&path) {
                continue;
            }
            for message in messages {
                self.push(path.clone(), message);
            }
        }
    }

    pub fn extend(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    /// `Ok(value)` when nothing was recorded, otherwise every error.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            if error.path.is_empty() {
                write!(f, "{}", error.message)?;
            } else {
                write!(f, "{}: {}", error.path, error.message)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Knobs that change how strict the primitives are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject dates like `2026-13-01` or `2026-02-30` that are well formed
    /// but do not exist on the calendar.
    pub strict_calendar_dates: bool,
}

/// A validator that turns a raw key-value bag into a typed value.
pub trait Schema: Sized {
    fn parse(input: RawInput, options: &ParseOptions) -> Result<Self, FieldErrors>;

    fn from_json(value: Value) -> Result<Self, FieldErrors> {
        Self::from_json_with(value, &ParseOptions::default())
    }

    fn from_json_with(value: Value, options: &ParseOptions) -> Result<Self, FieldErrors> {
        Self::parse(RawInput::from_json(value)?, options)
    }

    fn from_query(query: &str) -> Result<Self, FieldErrors> {
        Self::parse(RawInput::from_query(query), &ParseOptions::default())
    }
}

/// `min_price` -> `minPrice`. Keys without underscores pass through.
pub fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
