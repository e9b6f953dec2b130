// src/validation/input.rs

use std::collections::HashSet;

use serde_json::{Map, Value};
use url::form_urlencoded;
use uuid::Uuid;

use super::FieldErrors;
use super::primitives::{self, Choice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Json,
    Query,
}

/// A loosely typed key-value bag on its way to becoming a schema value.
///
/// Every reader removes its key, coerces the value (numeric strings to
/// numbers, `"true"`/`"false"` to booleans, comma-joined strings to lists)
/// and records a field error instead of failing, so one pass over a schema
/// collects every problem.
#[derive(Debug, Clone)]
pub struct RawInput {
    fields: Map<String, Value>,
    origin: Origin,
    ignored: HashSet<String>,
    errors: FieldErrors,
}

/// A multi-value field as it may arrive: one comma-joined string or an
/// already split list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListInput {
    Joined(String),
    Items(Vec<String>),
}

impl ListInput {
    pub fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::String(joined) => Ok(ListInput::Joined(joined)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    other => Err(expected("list of strings", &other)),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(ListInput::Items),
            other => Err(expected("string or list of strings", &other)),
        }
    }

    /// Ordered, trimmed, non-empty entries. Duplicates are kept.
    pub fn into_items(self) -> Vec<String> {
        let items: Vec<String> = match self {
            ListInput::Joined(joined) => joined.split(',').map(str::to_string).collect(),
            ListInput::Items(items) => items,
        };
        items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    }
}

impl RawInput {
    /// Wraps a JSON body. Anything but an object is rejected outright.
    pub fn from_json(value: Value) -> Result<Self, FieldErrors> {
        match value {
            Value::Object(fields) => Ok(Self::new(fields, Origin::Json)),
            other => Err(FieldErrors::single("", expected("object", &other))),
        }
    }

    /// Parses a URL query string (with or without the leading `?`).
    /// Repeated keys keep the last value.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let fields = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), Value::String(value.into_owned())))
            .collect();
        Self::new(fields, Origin::Query)
    }

    fn new(fields: Map<String, Value>, origin: Origin) -> Self {
        Self {
            fields,
            origin,
            ignored: HashSet::new(),
            errors: FieldErrors::new(),
        }
    }

    /// Moves `alias` under `canonical` when only the alias was supplied.
    pub fn alias(&mut self, canonical: &str, alias: &str) {
        let value = self.fields.remove(alias);
        if self.ignored.contains(canonical) || self.present(canonical) {
            return;
        }
        if let Some(value) = value {
            self.fields.insert(canonical.to_string(), value);
        }
    }

    /// Treats `key` as absent from now on.
    pub fn discard(&mut self, key: &str) {
        self.fields.remove(key);
        self.ignored.insert(key.to_string());
    }

    /// Whether `key` holds a usable value. `null` and, in query strings,
    /// empty values count as absent.
    pub fn present(&self, key: &str) -> bool {
        if self.ignored.contains(key) {
            return false;
        }
        match self.fields.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) if s.is_empty() && self.origin == Origin::Query => false,
            Some(_) => true,
        }
    }

    pub fn fail(&mut self, path: &str, message: impl Into<String>) {
        self.errors.push(path, message);
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn finish(self) -> FieldErrors {
        self.errors
    }

    fn take(&mut self, key: &str) -> Option<Value> {
        if !self.present(key) {
            self.fields.remove(key);
            return None;
        }
        self.fields.remove(key)
    }

    fn required<T>(&mut self, key: &str, placeholder: T, read: impl FnOnce(&mut Self) -> Option<T>) -> T {
        if !self.present(key) {
            self.fail(key, "Required");
            return placeholder;
        }
        read(self).unwrap_or(placeholder)
    }

    pub fn string(&mut self, key: &str) -> Option<String> {
        match self.take(key)? {
            Value::String(s) => Some(s),
            other => {
                self.fail(key, expected("string", &other));
                None
            }
        }
    }

    pub fn required_string(&mut self, key: &str) -> String {
        self.required(key, String::new(), |input| input.string(key))
    }

    pub fn number(&mut self, key: &str) -> Option<f64> {
        let value = self.take(key)?;
        match coerce_number(&value) {
            Ok(n) => Some(n),
            Err(message) => {
                self.fail(key, message);
                None
            }
        }
    }

    pub fn integer(&mut self, key: &str) -> Option<i64> {
        let n = self.number(key)?;
        if n.fract() != 0.0 || n < i64::MIN as f64 || n > i64::MAX as f64 {
            self.fail(key, "Expected integer, received float");
            return None;
        }
        Some(n as i64)
    }

    pub fn required_integer(&mut self, key: &str) -> i64 {
        self.required(key, 0, |input| input.integer(key))
    }

    /// A price: coerced to a number, then held to the hard ceiling.
    pub fn price(&mut self, key: &str) -> Option<f64> {
        let n = self.number(key)?;
        match primitives::price_bound(n) {
            Ok(n) => Some(n),
            Err(message) => {
                self.fail(key, message);
                None
            }
        }
    }

    pub fn required_price(&mut self, key: &str) -> f64 {
        self.required(key, 0.0, |input| input.price(key))
    }

    pub fn boolean(&mut self, key: &str) -> Option<bool> {
        match self.take(key)? {
            Value::Bool(b) => Some(b),
            Value::String(s) if s == "true" => Some(true),
            Value::String(s) if s == "false" => Some(false),
            other => {
                self.fail(key, expected("boolean", &other));
                None
            }
        }
    }

    /// A multi-value field. An empty result is reported as absent, never
    /// as an empty list.
    pub fn string_list(&mut self, key: &str) -> Option<Vec<String>> {
        let value = self.take(key)?;
        match ListInput::from_value(value) {
            Ok(list) => Some(list.into_items()).filter(|items| !items.is_empty()),
            Err(message) => {
                self.fail(key, message);
                None
            }
        }
    }

    pub fn choice<C: Choice>(&mut self, key: &str) -> Option<C> {
        let raw = self.string(key)?;
        match C::parse(&raw) {
            Some(choice) => Some(choice),
            None => {
                self.fail(key, primitives::choice_error::<C>(&raw));
                None
            }
        }
    }

    pub fn required_choice<C: Choice>(&mut self, key: &str) -> C {
        self.required(key, C::ALL[0], |input| input.choice(key))
    }

    /// A list of closed-set values; one bad entry rejects the field.
    pub fn choice_list<C: Choice>(&mut self, key: &str) -> Option<Vec<C>> {
        let items = self.string_list(key)?;
        let mut parsed = Vec::with_capacity(items.len());
        for item in &items {
            match C::parse(item) {
                Some(choice) => parsed.push(choice),
                None => {
                    self.fail(key, primitives::choice_error::<C>(item));
                    return None;
                }
            }
        }
        Some(parsed)
    }

    pub fn uuid(&mut self, key: &str) -> Option<Uuid> {
        self.parse_with(key, primitives::uuid)
    }

    pub fn required_uuid(&mut self, key: &str) -> Uuid {
        self.required(key, Uuid::nil(), |input| input.uuid(key))
    }

    /// Reads a string and hands it to a primitive validator.
    pub fn parse_with<T>(&mut self, key: &str, validate: impl FnOnce(&str) -> Result<T, String>) -> Option<T> {
        let raw = self.string(key)?;
        match validate(&raw) {
            Ok(value) => Some(value),
            Err(message) => {
                self.fail(key, message);
                None
            }
        }
    }

    pub fn required_with<T: Default>(
        &mut self,
        key: &str,
        validate: impl FnOnce(&str) -> Result<T, String>,
    ) -> T {
        self.required(key, T::default(), |input| input.parse_with(key, validate))
    }
}

fn coerce_number(value: &Value) -> Result<f64, String> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| "Expected number".to_string()),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| format!("Expected number, received '{s}'")),
        other => Err(expected("number", other)),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expected(what: &str, received: &Value) -> String {
    format!("Expected {what}, received {}", kind(received))
}
