//! Extraction of symptom names from a prediction request document.
//!
//! Accepted shapes, checked in order:
//! 1. `{"symptoms": ["fever", ...]}`; a mapping under `symptoms` contributes
//!    its keys and a string contributes one name per character
//! 2. `["fever", ...]`
//! 3. any other mapping: its string values are used as symptoms
//! 4. any other document: no symptoms

use serde_json::{Map, Value};

/// Errors raised while reading a prediction request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("No input data provided")]
    Empty,
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("'symptoms' must be a list, mapping or string, found {0}")]
    NotAList(&'static str),
    #[error("symptom at position {index} is {found}, expected a string")]
    NotAString { index: usize, found: &'static str },
}

/// A parsed prediction request, tagged by the shape it arrived in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymptomRequest {
    /// A mapping with a `symptoms` entry
    Wrapped(Vec<String>),
    /// A bare list of names
    List(Vec<String>),
    /// A mapping without `symptoms`; holds its string-typed values, possibly none
    Harvested(Vec<String>),
    /// A scalar document; carries no symptoms
    Unstructured,
}

impl SymptomRequest {
    /// Parses raw standard-input bytes.
    ///
    /// Only a zero-length input counts as empty; whitespace is handed to the
    /// JSON parser and fails there.
    pub fn parse(raw: &[u8]) -> Result<Self, RequestError> {
        if raw.is_empty() {
            return Err(RequestError::Empty);
        }
        let document: Value = serde_json::from_slice(raw)?;
        Self::from_value(document)
    }

    pub fn from_value(document: Value) -> Result<Self, RequestError> {
        match document {
            Value::Object(mut map) => match map.remove("symptoms") {
                Some(symptoms) => Ok(Self::Wrapped(string_list(symptoms)?)),
                None => Ok(Self::Harvested(harvest_strings(map))),
            },
            Value::Array(items) => Ok(Self::List(strings(items)?)),
            _ => Ok(Self::Unstructured),
        }
    }

    /// Symptom names as supplied, before trimming or lookup
    pub fn symptoms(&self) -> &[String] {
        match self {
            Self::Wrapped(s) | Self::List(s) | Self::Harvested(s) => s,
            Self::Unstructured => &[],
        }
    }

    /// Short name of the request shape, for logging
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Wrapped(_) => "wrapped",
            Self::List(_) => "list",
            Self::Harvested(_) => "harvested",
            Self::Unstructured => "unstructured",
        }
    }
}

fn string_list(value: Value) -> Result<Vec<String>, RequestError> {
    match value {
        Value::Array(items) => strings(items),
        Value::Object(map) => Ok(map.into_iter().map(|(k, _)| k).collect()),
        Value::String(s) => Ok(s.chars().map(String::from).collect()),
        other => Err(RequestError::NotAList(type_name(&other))),
    }
}

fn strings(items: Vec<Value>) -> Result<Vec<String>, RequestError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(s) => Ok(s),
            other => Err(RequestError::NotAString {
                index,
                found: type_name(&other),
            }),
        })
        .collect()
}

fn harvest_strings(map: Map<String, Value>) -> Vec<String> {
    map.into_iter()
        .filter_map(|(_, v)| match v {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
