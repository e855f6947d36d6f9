//! Boolean filter evaluation
//!
//! Two-valued logic with fail-soft degradation:
//!
//! - a missing property or non-comparable operand pair makes the enclosing
//!   comparison `false`, never an error
//! - `NOT` over such a comparison therefore evaluates `true`
//!
//! And/Or evaluate children in declaration order and short-circuit: And
//! stops at the first `false` child, Or at the first `true` child.

use tracing::trace;

use crate::compare::{compare_values, CompareOp};
use crate::feature::Feature;
use crate::filter::{Comparison, Filter, LogicFilter, NotFilter};

impl Filter {
    /// Evaluate this filter against a feature
    pub fn evaluate<F: Feature>(&self, feature: &F) -> bool {
        match self {
            Filter::And(logic) => logic.all(feature),
            Filter::Or(logic) => logic.any(feature),
            Filter::Not(not) => not.evaluate(feature),
            Filter::Comparison(cmp) => cmp.evaluate(feature),
        }
    }
}

impl LogicFilter {
    /// Conjunction: short-circuits `false` at the first false child.
    ///
    /// An empty child sequence cannot be constructed through the public
    /// API; were one to occur, the result is vacuous truth.
    fn all<F: Feature>(&self, feature: &F) -> bool {
        self.children().iter().all(|child| child.evaluate(feature))
    }

    /// Disjunction: short-circuits `true` at the first true child.
    ///
    /// The vacuous (empty-children) result is `false`.
    fn any<F: Feature>(&self, feature: &F) -> bool {
        self.children().iter().any(|child| child.evaluate(feature))
    }
}

impl NotFilter {
    /// Negation of the single child.
    ///
    /// A never-populated node is treated as holding a vacuous-false child,
    /// so it evaluates `true`.
    pub fn evaluate<F: Feature>(&self, feature: &F) -> bool {
        !self
            .child()
            .is_some_and(|child| child.evaluate(feature))
    }
}

impl Comparison {
    /// Evaluate this comparison against a feature
    ///
    /// `false` when either operand is absent or the pair is non-comparable;
    /// otherwise the operator's sign test over the three-way comparison.
    pub fn evaluate<F: Feature>(&self, feature: &F) -> bool {
        match self.op() {
            // NotEqual is the negation of the Equal path over the same
            // operands and case flag. Equality has a single implementation,
            // so the complementary-pair law holds by construction.
            CompareOp::NotEqual => !self.evaluate_op(CompareOp::Equal, feature),
            op => self.evaluate_op(op, feature),
        }
    }

    fn evaluate_op<F: Feature>(&self, op: CompareOp, feature: &F) -> bool {
        let Some(left) = self.left().evaluate(feature) else {
            return false;
        };
        let Some(right) = self.right().evaluate(feature) else {
            return false;
        };

        match compare_values(&left, &right, self.is_match_case()) {
            Some(ordering) => op.satisfied_by(ordering),
            None => {
                trace!(?op, "operands not comparable, comparison is false");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Expression;
    use crate::value::Value;
    use std::collections::HashMap;

    fn feature() -> HashMap<String, Value> {
        let mut f = HashMap::new();
        f.insert("depth".to_string(), Value::Long(5));
        f.insert("name".to_string(), Value::Text("River".into()));
        f
    }

    fn cmp(op: CompareOp, left: Value, right: Value) -> Filter {
        Filter::comparison(
            op,
            Expression::literal(left),
            Expression::literal(right),
            true,
        )
    }

    #[test]
    fn test_greater_than() {
        let f = feature();
        assert!(cmp(CompareOp::GreaterThan, Value::Long(5), Value::Long(3)).evaluate(&f));
        assert!(!cmp(CompareOp::GreaterThan, Value::Long(3), Value::Long(5)).evaluate(&f));
        assert!(!cmp(CompareOp::GreaterThan, Value::Long(3), Value::Long(3)).evaluate(&f));
    }

    #[test]
    fn test_non_comparable_is_false_not_error() {
        let f = feature();
        let list = Value::List(vec![Value::Long(1)]);
        assert!(!cmp(CompareOp::GreaterThan, list.clone(), Value::Long(1)).evaluate(&f));
        assert!(!cmp(CompareOp::Equal, list, Value::Long(1)).evaluate(&f));
    }

    #[test]
    fn test_missing_property_is_false() {
        let filter = Filter::comparison(
            CompareOp::Equal,
            Expression::property("missing"),
            Expression::literal(Value::Long(1)),
            true,
        );
        assert!(!filter.evaluate(&feature()));
    }

    #[test]
    fn test_not_equal_negates_equal() {
        let f = feature();
        let pairs = [
            (Value::Long(1), Value::Long(1)),
            (Value::Long(1), Value::Long(2)),
            (Value::Text("a".into()), Value::Text("A".into())),
            // Non-comparable pair: Equal is false, so NotEqual must be true
            (Value::List(vec![]), Value::Long(1)),
        ];
        for (left, right) in pairs {
            for match_case in [true, false] {
                let eq = Filter::comparison(
                    CompareOp::Equal,
                    Expression::literal(left.clone()),
                    Expression::literal(right.clone()),
                    match_case,
                );
                let ne = Filter::comparison(
                    CompareOp::NotEqual,
                    Expression::literal(left.clone()),
                    Expression::literal(right.clone()),
                    match_case,
                );
                assert_eq!(ne.evaluate(&f), !eq.evaluate(&f));
            }
        }
    }

    #[test]
    fn test_case_flag_on_text() {
        let f = feature();
        let eq_insensitive = Filter::comparison(
            CompareOp::Equal,
            Expression::property("name"),
            Expression::literal(Value::Text("river".into())),
            false,
        );
        let eq_sensitive = Filter::comparison(
            CompareOp::Equal,
            Expression::property("name"),
            Expression::literal(Value::Text("river".into())),
            true,
        );
        assert!(eq_insensitive.evaluate(&f));
        assert!(!eq_sensitive.evaluate(&f));
    }

    #[test]
    fn test_and_or_not() {
        let f = feature();
        let t = cmp(CompareOp::Equal, Value::Long(1), Value::Long(1));
        let fls = cmp(CompareOp::Equal, Value::Long(1), Value::Long(2));

        assert!(Filter::and(vec![t.clone(), t.clone()]).unwrap().evaluate(&f));
        assert!(!Filter::and(vec![t.clone(), fls.clone()]).unwrap().evaluate(&f));
        assert!(Filter::or(vec![fls.clone(), t.clone()]).unwrap().evaluate(&f));
        assert!(!Filter::or(vec![fls.clone(), fls.clone()]).unwrap().evaluate(&f));
        assert!(!Filter::not(t).evaluate(&f));
        assert!(Filter::not(fls).evaluate(&f));
    }

    #[test]
    fn test_never_populated_not_is_true() {
        let not = NotFilter::default();
        assert!(not.evaluate(&feature()));
    }
}
