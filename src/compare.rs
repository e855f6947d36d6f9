//! Three-way value comparison
//!
//! `compare_values` is the single ordering primitive every relational
//! predicate is built from; each operator is a pure predicate over the sign
//! of its result. Coercion tries a common orderable representation by
//! inspecting both runtime shapes, in order:
//!
//! - numeric (cross-representation, including numeric strings vs numbers)
//! - temporal (same-type, plus strings parsed against a temporal operand)
//! - textual (the case flag selects raw vs case-normalized comparison)
//! - boolean
//!
//! Non-comparable pairs yield `None`. Callers turn `None` into a defined
//! `false` predicate result, never an error.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::value::{parse_date, parse_datetime, Value};

/// Comparison operator tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    Equal,
    NotEqual,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
}

impl CompareOp {
    /// Whether an ordering satisfies this operator's sign test
    ///
    /// `NotEqual` is listed for exhaustiveness but comparison evaluation
    /// never reaches it directly: it is derived by negating the Equal path
    /// (see `Comparison::evaluate`).
    pub(crate) fn satisfied_by(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Equal => ordering == Ordering::Equal,
            CompareOp::NotEqual => ordering != Ordering::Equal,
            CompareOp::LessThan => ordering == Ordering::Less,
            CompareOp::GreaterThan => ordering == Ordering::Greater,
            CompareOp::LessThanOrEqual => ordering != Ordering::Greater,
            CompareOp::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }
}

/// Compare two values under a common orderable representation.
///
/// Returns `None` for non-comparable pairs (e.g. a list vs a number).
/// `match_case` affects textual operands only.
pub fn compare_values(left: &Value, right: &Value, match_case: bool) -> Option<Ordering> {
    if let Some(ordering) = numeric_cmp(left, right) {
        return Some(ordering);
    }

    if let Some(ordering) = temporal_cmp(left, right) {
        return Some(ordering);
    }

    match (left, right) {
        (Value::Text(a), Value::Text(b)) => {
            if match_case {
                Some(a.cmp(b))
            } else {
                Some(a.to_lowercase().cmp(&b.to_lowercase()))
            }
        }
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        // Type mismatch
        _ => None,
    }
}

/// Numeric comparison when at least one side is a number.
///
/// The other side may be a numeric string; two longs compare exactly,
/// everything else goes through f64 (NaN yields `None`).
fn numeric_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Long(a), Value::Long(b)) => Some(a.cmp(b)),
        (Value::Long(_) | Value::Double(_), _) | (_, Value::Long(_) | Value::Double(_)) => {
            let a = left.as_f64()?;
            let b = right.as_f64()?;
            a.partial_cmp(&b)
        }
        _ => None,
    }
}

/// Temporal comparison, coercing a string operand by parsing it as the
/// other side's temporal type. A date compares against a datetime as
/// midnight of that date.
fn temporal_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::DateTime(a), Value::DateTime(b)) => Some(a.cmp(b)),
        (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
        (Value::Date(a), Value::DateTime(b)) => {
            a.and_hms_opt(0, 0, 0).map(|dt| dt.cmp(b))
        }
        (Value::DateTime(a), Value::Date(b)) => {
            b.and_hms_opt(0, 0, 0).map(|dt| a.cmp(&dt))
        }
        (Value::Text(s), Value::DateTime(b)) => parse_datetime(s).map(|parsed| parsed.cmp(b)),
        (Value::DateTime(a), Value::Text(s)) => parse_datetime(s).map(|parsed| a.cmp(&parsed)),
        (Value::Text(s), Value::Date(b)) => parse_date(s).map(|parsed| parsed.cmp(b)),
        (Value::Date(a), Value::Text(s)) => parse_date(s).map(|parsed| a.cmp(&parsed)),
        _ => None,
    }
}
