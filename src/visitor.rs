//! Visitor protocol for filter and expression trees
//!
//! Double dispatch: `accept` invokes the visitor's variant-specific method
//! with `(node, extra)` and returns its result unchanged. This is the sole
//! extension point for adding behavior — serialization, rewriting,
//! translation to external query languages, validation — without touching
//! the node types.
//!
//! `accept` never recurses. Descending into children (pre-order,
//! post-order, or skipping subtrees entirely) is the visitor's choice.

use crate::expression::{EnvironmentValue, Expression, Literal, PropertyName};
use crate::filter::{Comparison, Filter, LogicFilter, NotFilter};
use crate::function::FunctionCall;

/// Behavior dispatched over filter variants
///
/// `Extra` is an arbitrary caller-supplied token threaded through the
/// dispatch; `Output` is the visitor's result type.
pub trait FilterVisitor {
    type Extra;
    type Output;

    fn visit_and(&mut self, filter: &LogicFilter, extra: Self::Extra) -> Self::Output;
    fn visit_or(&mut self, filter: &LogicFilter, extra: Self::Extra) -> Self::Output;
    fn visit_not(&mut self, filter: &NotFilter, extra: Self::Extra) -> Self::Output;
    fn visit_comparison(&mut self, filter: &Comparison, extra: Self::Extra) -> Self::Output;
}

/// Behavior dispatched over expression variants
pub trait ExpressionVisitor {
    type Extra;
    type Output;

    fn visit_literal(&mut self, literal: &Literal, extra: Self::Extra) -> Self::Output;
    fn visit_property(&mut self, property: &PropertyName, extra: Self::Extra) -> Self::Output;
    fn visit_function(&mut self, call: &FunctionCall, extra: Self::Extra) -> Self::Output;
    fn visit_environment(&mut self, env: &EnvironmentValue, extra: Self::Extra) -> Self::Output;
}

impl Filter {
    /// Dispatch to the visitor method matching this variant
    pub fn accept<V: FilterVisitor>(&self, visitor: &mut V, extra: V::Extra) -> V::Output {
        match self {
            Filter::And(logic) => visitor.visit_and(logic, extra),
            Filter::Or(logic) => visitor.visit_or(logic, extra),
            Filter::Not(not) => visitor.visit_not(not, extra),
            Filter::Comparison(cmp) => visitor.visit_comparison(cmp, extra),
        }
    }
}

impl Expression {
    /// Dispatch to the visitor method matching this variant
    pub fn accept<V: ExpressionVisitor>(&self, visitor: &mut V, extra: V::Extra) -> V::Output {
        match self {
            Expression::Literal(lit) => visitor.visit_literal(lit, extra),
            Expression::Property(prop) => visitor.visit_property(prop, extra),
            Expression::Function(call) => visitor.visit_function(call, extra),
            Expression::Environment(env) => visitor.visit_environment(env, extra),
        }
    }
}
