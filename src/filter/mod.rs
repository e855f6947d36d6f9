//! Filter nodes
//!
//! A `Filter` is a tree of logical connectives and comparison predicates
//! producing a boolean per feature. The variant is the type — there are no
//! auxiliary type tags.
//!
//! Shape invariants are enforced at construction and whole-sequence
//! replacement, never re-checked during evaluation:
//!
//! - And/Or child sequences are non-empty and exclusively owned
//! - Not holds exactly one child once set
//! - Comparison operands and case flag are fixed at construction
//!
//! # Evaluation semantics
//!
//! Two-valued, fail-soft logic (see `eval`): missing properties and
//! non-comparable operand pairs make the enclosing comparison `false`;
//! evaluation never errors.

mod eval;

use serde::{Deserialize, Serialize};

use crate::compare::CompareOp;
use crate::error::{FilterError, Result};
use crate::expression::Expression;

/// A boolean predicate over features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Filter {
    /// Variadic conjunction
    And(LogicFilter),
    /// Variadic disjunction
    Or(LogicFilter),
    /// Negation of a single child
    Not(NotFilter),
    /// Relational predicate over two expressions
    Comparison(Comparison),
}

impl Filter {
    /// Create a conjunction; fails on an empty child sequence
    pub fn and(children: Vec<Filter>) -> Result<Self> {
        Ok(Filter::And(LogicFilter::new(children)?))
    }

    /// Create a disjunction; fails on an empty child sequence
    pub fn or(children: Vec<Filter>) -> Result<Self> {
        Ok(Filter::Or(LogicFilter::new(children)?))
    }

    /// Create a negation
    pub fn not(child: Filter) -> Self {
        Filter::Not(NotFilter::new(child))
    }

    /// Create a comparison predicate
    pub fn comparison(op: CompareOp, left: Expression, right: Expression, match_case: bool) -> Self {
        Filter::Comparison(Comparison::new(op, left, right, match_case))
    }
}

/// Child sequence of a variadic logical connective
///
/// The sequence is exclusively owned by its node — never shared or aliased
/// across filters — and mutation happens only through whole-sequence
/// replacement, which preserves non-emptiness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicFilter {
    children: Vec<Filter>,
}

impl LogicFilter {
    /// Create a connective over a non-empty child sequence
    pub fn new(children: Vec<Filter>) -> Result<Self> {
        if children.is_empty() {
            return Err(FilterError::EmptyChildren);
        }
        Ok(Self { children })
    }

    /// Children, in declaration (evaluation) order
    pub fn children(&self) -> &[Filter] {
        &self.children
    }

    /// Replace the whole child sequence; fails on an empty replacement
    pub fn set_children(&mut self, children: Vec<Filter>) -> Result<()> {
        if children.is_empty() {
            return Err(FilterError::EmptyChildren);
        }
        self.children = children;
        Ok(())
    }
}

/// Negation node holding a single child
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotFilter {
    child: Option<Box<Filter>>,
}

impl NotFilter {
    /// Create a negation over a child
    pub fn new(child: Filter) -> Self {
        Self {
            child: Some(Box::new(child)),
        }
    }

    /// The negated child, absent only on a never-populated node
    pub fn child(&self) -> Option<&Filter> {
        self.child.as_deref()
    }

    /// Install a child: appends on an empty node, replaces otherwise
    pub fn set_child(&mut self, child: Filter) {
        self.child = Some(Box::new(child));
    }
}

/// Relational predicate over two operand expressions
///
/// Operands and the case flag are fixed at construction. The case flag
/// applies only when both operands compare textually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    op: CompareOp,
    left: Expression,
    right: Expression,
    match_case: bool,
}

impl Comparison {
    /// Create a comparison
    pub fn new(op: CompareOp, left: Expression, right: Expression, match_case: bool) -> Self {
        Self {
            op,
            left,
            right,
            match_case,
        }
    }

    /// Operator tag
    pub fn op(&self) -> CompareOp {
        self.op
    }

    /// Left operand
    pub fn left(&self) -> &Expression {
        &self.left
    }

    /// Right operand
    pub fn right(&self) -> &Expression {
        &self.right
    }

    /// Whether textual comparison is case-sensitive
    pub fn is_match_case(&self) -> bool {
        self.match_case
    }
}
