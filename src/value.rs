//! Runtime value model and target-type coercion
//!
//! `Value` is what expressions produce and what feature accessors return.
//! All conversions are best-effort and return `Option` — an inconvertible
//! value is a defined `None`, never an error, so predicate evaluation over
//! heterogeneous data stays total.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A value produced by evaluating an expression against a feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Long(i64),
    Double(f64),
    Text(String),
    Bool(bool),
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    /// Heterogeneous accessor results are representable but never orderable
    List(Vec<Value>),
}

/// Target type for requested coercion in `Expression::evaluate_as`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    Long,
    Double,
    Text,
    Bool,
    DateTime,
    Date,
}

impl Value {
    /// Render this value as text, if it has a textual form
    ///
    /// Lists have no textual form and yield `None`.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Text(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Long(n) => Some(Cow::Owned(n.to_string())),
            Value::Double(d) => Some(Cow::Owned(d.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::DateTime(dt) => Some(Cow::Owned(dt.to_string())),
            Value::Date(d) => Some(Cow::Owned(d.to_string())),
            Value::List(_) => None,
        }
    }

    /// Numeric reading of this value, including numeric strings
    pub(crate) fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Long(n) => Some(*n as f64),
            Value::Double(d) => Some(*d),
            Value::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Coerce this value to the requested target type
    ///
    /// Returns `None` when no sensible conversion exists.
    pub fn coerce_to(&self, target: ValueType) -> Option<Value> {
        match target {
            ValueType::Long => match self {
                Value::Long(n) => Some(Value::Long(*n)),
                Value::Double(d) if d.fract() == 0.0 => Some(Value::Long(*d as i64)),
                Value::Text(s) => s.trim().parse().ok().map(Value::Long),
                _ => None,
            },
            ValueType::Double => self.as_f64().map(Value::Double),
            ValueType::Text => self.as_text().map(|t| Value::Text(t.into_owned())),
            ValueType::Bool => match self {
                Value::Bool(b) => Some(Value::Bool(*b)),
                Value::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                    "true" => Some(Value::Bool(true)),
                    "false" => Some(Value::Bool(false)),
                    _ => None,
                },
                _ => None,
            },
            ValueType::DateTime => match self {
                Value::DateTime(dt) => Some(Value::DateTime(*dt)),
                Value::Date(d) => d.and_hms_opt(0, 0, 0).map(Value::DateTime),
                Value::Text(s) => parse_datetime(s).map(Value::DateTime),
                _ => None,
            },
            ValueType::Date => match self {
                Value::Date(d) => Some(Value::Date(*d)),
                Value::DateTime(dt) => Some(Value::Date(dt.date())),
                Value::Text(s) => parse_date(s).map(Value::Date),
                _ => None,
            },
        }
    }
}

/// Parse an ISO-8601 datetime, accepting a bare date as midnight
pub(crate) fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    s.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| s.parse::<NaiveDate>().ok().and_then(|d| d.and_hms_opt(0, 0, 0)))
}

/// Parse an ISO-8601 date
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    s.trim().parse::<NaiveDate>().ok()
}
