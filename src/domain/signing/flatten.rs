//! Canonical flattening of signable documents into path/value pairs.
//!
//! Paths join member names and array indexes with `:`, so
//! `{"general": {"ids": [7]}}` yields `general:ids:0 = "7"`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::errors::SigningError;
use super::value::SignValue;

const PATH_SEPARATOR: char = ':';

/// Flat path → text mapping that a signature is computed over.
///
/// Keys are unique; a later insert at the same path overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatParams(BTreeMap<String, String>);

impl FlatParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<String>) {
        self.0.insert(path.into(), value.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    /// Removes every entry whose path contains `fragment`.
    pub fn remove_containing(&mut self, fragment: &str) {
        self.0.retain(|path, _| !path.contains(fragment));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FlatParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = FlatParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Flattens a document whose root is a non-empty object.
pub fn flatten(document: &SignValue) -> Result<FlatParams, SigningError> {
    let SignValue::Object(members) = document else {
        return Err(SigningError::NotFlattenable);
    };
    if members.is_empty() {
        return Err(SigningError::NotFlattenable);
    }

    let mut params = FlatParams::new();
    for (key, value) in members {
        flatten_into(&mut params, key.clone(), value);
    }
    Ok(params)
}

fn flatten_into(params: &mut FlatParams, name: String, value: &SignValue) {
    match value {
        SignValue::Object(members) => {
            for (key, child) in members {
                flatten_into(params, join(&name, key), child);
            }
        }
        SignValue::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(params, join(&name, &index.to_string()), child);
            }
        }
        SignValue::String(s) => params.insert(name, s.as_str()),
        SignValue::Integer(i) => params.insert(name, i.to_string()),
        SignValue::Float(f) => params.insert(name, format_float(*f)),
        SignValue::Bool(b) => params.insert(name, if *b { "1" } else { "0" }),
        SignValue::DateTime(dt) => params.insert(name, format_date_time(dt)),
        SignValue::Null => params.insert(name, ""),
    }
}

fn join(name: &str, key: &str) -> String {
    let mut path = String::with_capacity(name.len() + key.len() + 1);
    path.push_str(name);
    path.push(PATH_SEPARATOR);
    path.push_str(key);
    path
}

/// Integral floats render without a fractional part.
fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

/// Renders a UTC instant as `yyyy-MM-ddTHH:mm:ss+0000`.
pub fn format_date_time(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S+0000").to_string()
}
