//! Expression nodes
//!
//! An `Expression` produces a value when evaluated against a feature:
//!
//! - `Literal`: a constant, ignoring the feature
//! - `Property`: delegates to the feature accessor
//! - `Function`: a named callable over argument expressions
//! - `Environment`: a stateless placeholder for ambient context (map scale)
//!
//! Evaluation is depth-first and fail-soft: an absent or non-evaluable
//! operand is `None`, never an error.

use serde::{Deserialize, Serialize};

use crate::error::{FilterError, Result};
use crate::feature::Feature;
use crate::function::FunctionCall;
use crate::value::{Value, ValueType};

/// Scale denominator reported by the map-scale placeholder until a live
/// rendering context substitutes the real one (an external concern).
pub const DEFAULT_MAP_SCALE: f64 = 1.0;

/// A value-producing expression evaluated against a feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Constant value
    Literal(Literal),
    /// Property reference resolved through the feature accessor
    Property(PropertyName),
    /// Named function call
    Function(FunctionCall),
    /// Ambient-context placeholder
    Environment(EnvironmentValue),
}

impl Expression {
    /// Create a literal expression
    pub fn literal(value: Value) -> Self {
        Expression::Literal(Literal::new(value))
    }

    /// Create a property-reference expression
    pub fn property(name: impl Into<String>) -> Self {
        Expression::Property(PropertyName::new(name))
    }

    /// Evaluate this expression against a feature
    ///
    /// Returns `None` when the value is absent or not locally evaluable.
    pub fn evaluate<F: Feature>(&self, feature: &F) -> Option<Value> {
        match self {
            Expression::Literal(lit) => Some(lit.value().clone()),
            Expression::Property(prop) => feature.property(prop.name()),
            Expression::Function(call) => call.evaluate(feature),
            Expression::Environment(env) => Some(env.value()),
        }
    }

    /// Evaluate and coerce the result to a requested target type
    pub fn evaluate_as<F: Feature>(&self, feature: &F, target: ValueType) -> Option<Value> {
        self.evaluate(feature).and_then(|v| v.coerce_to(target))
    }
}

/// An immutable constant expression
///
/// Literals declared `fixed` represent environment constants (such as the
/// map-scale placeholder) and reject any later value mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    value: Value,
    fixed: bool,
}

impl Literal {
    /// Create a mutable literal
    pub fn new(value: Value) -> Self {
        Self {
            value,
            fixed: false,
        }
    }

    /// Create a fixed literal whose value can never be replaced
    pub fn fixed(value: Value) -> Self {
        Self { value, fixed: true }
    }

    /// The constant value
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Whether this literal rejects mutation
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Replace the constant value
    ///
    /// Fails hard with `UnsupportedMutation` on a fixed literal: silently
    /// accepting the set would leave an expression that evaluates to a value
    /// inconsistent with what was "set".
    pub fn set_value(&mut self, value: Value) -> Result<()> {
        if self.fixed {
            return Err(FilterError::UnsupportedMutation(
                "literal is a fixed environment constant",
            ));
        }
        self.value = value;
        Ok(())
    }
}

/// A property reference, resolved against a feature by the accessor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyName {
    name: String,
}

impl PropertyName {
    /// Create a property reference
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The referenced property name
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Stateless ambient-context expression
///
/// Always yields the same constant in this kernel; a deployment wanting
/// live context substitutes it externally (typically by rewriting the tree
/// through a visitor before evaluation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvironmentValue {
    /// Current map scale denominator placeholder
    MapScale,
}

impl EnvironmentValue {
    /// The constant this placeholder yields
    pub fn value(&self) -> Value {
        match self {
            EnvironmentValue::MapScale => Value::Double(DEFAULT_MAP_SCALE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn feature() -> HashMap<String, Value> {
        let mut f = HashMap::new();
        f.insert("depth".to_string(), Value::Long(12));
        f
    }

    #[test]
    fn test_literal_ignores_feature() {
        let expr = Expression::literal(Value::Long(7));
        assert_eq!(expr.evaluate(&feature()), Some(Value::Long(7)));
        assert_eq!(expr.evaluate(&HashMap::new()), Some(Value::Long(7)));
    }

    #[test]
    fn test_property_delegates_to_accessor() {
        let expr = Expression::property("depth");
        assert_eq!(expr.evaluate(&feature()), Some(Value::Long(12)));
        assert_eq!(Expression::property("missing").evaluate(&feature()), None);
    }

    #[test]
    fn test_fixed_literal_rejects_mutation() {
        let mut lit = Literal::fixed(Value::Double(DEFAULT_MAP_SCALE));
        let err = lit.set_value(Value::Double(50_000.0)).unwrap_err();
        assert!(matches!(err, FilterError::UnsupportedMutation(_)));
        // Value is unchanged after the rejected set
        assert_eq!(lit.value(), &Value::Double(DEFAULT_MAP_SCALE));

        let mut plain = Literal::new(Value::Long(1));
        plain.set_value(Value::Long(2)).unwrap();
        assert_eq!(plain.value(), &Value::Long(2));
    }

    #[test]
    fn test_environment_constant() {
        let expr = Expression::Environment(EnvironmentValue::MapScale);
        assert_eq!(
            expr.evaluate(&feature()),
            Some(Value::Double(DEFAULT_MAP_SCALE))
        );
    }

    #[test]
    fn test_evaluate_as_coerces() {
        let expr = Expression::property("depth");
        assert_eq!(
            expr.evaluate_as(&feature(), ValueType::Text),
            Some(Value::Text("12".into()))
        );
        assert_eq!(
            expr.evaluate_as(&feature(), ValueType::Double),
            Some(Value::Double(12.0))
        );
        assert_eq!(expr.evaluate_as(&feature(), ValueType::Date), None);
    }
}
