//! Function framework
//!
//! A `FunctionCall` is a named callable of fixed arity over argument
//! expressions. Arity is part of the function's identity, validated by the
//! construction collaborator and only reported here.
//!
//! Functions the engine declines to evaluate locally are kept in the tree
//! as `FunctionKind::Fallback`: the call survives verbatim for downstream
//! translators (visitors re-emitting it into SQL, WFS, ...), while any
//! local evaluation attempt degrades to a caller-supplied literal instead
//! of failing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::expression::{Expression, Literal};
use crate::feature::Feature;
use crate::value::Value;

/// The semantics a function call carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FunctionKind {
    /// Character count of the single argument rendered as text
    Length,
    /// Not locally evaluable; evaluation yields the held literal
    Fallback(Literal),
}

/// A named, fixed-arity callable expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    name: String,
    args: Vec<Expression>,
    kind: FunctionKind,
}

impl FunctionCall {
    /// Create a length call over one argument
    pub fn length(arg: Expression) -> Self {
        Self {
            name: "length".to_string(),
            args: vec![arg],
            kind: FunctionKind::Length,
        }
    }

    /// Create a fallback call
    ///
    /// `params` is the original argument list, preserved for translators;
    /// `fallback` is the literal any local evaluation returns.
    pub fn fallback(name: impl Into<String>, params: Vec<Expression>, fallback: Literal) -> Self {
        Self {
            name: name.into(),
            args: params,
            kind: FunctionKind::Fallback(fallback),
        }
    }

    /// Function name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared arguments, in call order
    pub fn args(&self) -> &[Expression] {
        &self.args
    }

    /// The semantics this call carries
    pub fn kind(&self) -> &FunctionKind {
        &self.kind
    }

    /// Declared argument count
    ///
    /// Fallback calls report 0 regardless of their parameter list: they are
    /// not meant to be locally invoked with their real arguments.
    pub fn arg_count(&self) -> usize {
        match &self.kind {
            FunctionKind::Length => 1,
            FunctionKind::Fallback(_) => 0,
        }
    }

    /// Evaluate this call against a feature
    pub fn evaluate<F: Feature>(&self, feature: &F) -> Option<Value> {
        match &self.kind {
            FunctionKind::Length => {
                // Absent or textless argument counts as length zero
                let len = self
                    .args
                    .first()
                    .and_then(|arg| arg.evaluate(feature))
                    .and_then(|v| v.as_text().map(|t| t.chars().count()))
                    .unwrap_or(0);
                Some(Value::Long(len as i64))
            }
            FunctionKind::Fallback(lit) => {
                debug!(name = %self.name, "function not locally evaluable, returning fallback literal");
                Some(lit.value().clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn feature() -> HashMap<String, Value> {
        let mut f = HashMap::new();
        f.insert("name".to_string(), Value::Text("hello".into()));
        f
    }

    #[test]
    fn test_length_of_text() {
        let call = FunctionCall::length(Expression::property("name"));
        assert_eq!(call.evaluate(&feature()), Some(Value::Long(5)));
        assert_eq!(call.arg_count(), 1);
    }

    #[test]
    fn test_length_of_missing_is_zero() {
        let call = FunctionCall::length(Expression::property("missing"));
        assert_eq!(call.evaluate(&feature()), Some(Value::Long(0)));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let call = FunctionCall::length(Expression::literal(Value::Text("héllo".into())));
        assert_eq!(call.evaluate(&feature()), Some(Value::Long(5)));
    }

    #[test]
    fn test_length_of_number_renders_as_text() {
        let call = FunctionCall::length(Expression::literal(Value::Long(1234)));
        assert_eq!(call.evaluate(&feature()), Some(Value::Long(4)));
    }

    #[test]
    fn test_fallback_reports_zero_args_and_constant_value() {
        let call = FunctionCall::fallback(
            "foo",
            vec![Expression::property("a"), Expression::property("b")],
            Literal::new(Value::Long(42)),
        );
        assert_eq!(call.name(), "foo");
        assert_eq!(call.args().len(), 2);
        assert_eq!(call.arg_count(), 0);
        assert_eq!(call.evaluate(&feature()), Some(Value::Long(42)));
        assert_eq!(call.evaluate(&HashMap::new()), Some(Value::Long(42)));
    }
}
