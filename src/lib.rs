//! Predicate and expression evaluation kernel for feature filtering
//!
//! A `Filter` is a tree of logical connectives (And/Or/Not) and comparison
//! predicates composed over value-producing `Expression`s. Both trees are
//! evaluated against an opaque record (a `Feature`) reached only through an
//! accessor trait.
//!
//! # Evaluation semantics
//!
//! Two-valued, fail-soft logic:
//!
//! - missing properties and non-comparable operand pairs make the enclosing
//!   comparison `false`, never an error, so batch evaluation over
//!   heterogeneous or partial data is total
//! - `And`/`Or` evaluate children in declaration order with short-circuit
//! - `NotEqual` is derived by negating the `Equal` path, so the two are
//!   complementary by construction
//! - functions the kernel declines to evaluate locally degrade to a
//!   caller-supplied fallback literal, preserving the call in the tree for
//!   downstream translators
//!
//! # Extension
//!
//! External consumers (serializers, optimizers, translators to SQL/WFS)
//! extend behavior through the visitor protocol (`FilterVisitor`,
//! `ExpressionVisitor`) without modifying node types. Traversal into
//! children is the visitor's responsibility.
//!
//! # Concurrency
//!
//! Evaluation is synchronous and non-blocking. Immutable trees may be
//! evaluated concurrently against different features; callers serialize any
//! structural mutation against concurrent evaluation.

pub mod compare;
pub mod error;
pub mod expression;
pub mod feature;
pub mod filter;
pub mod function;
pub mod handler;
pub mod sort;
pub mod value;
pub mod visitor;

pub use compare::{compare_values, CompareOp};
pub use error::{FilterError, Result};
pub use expression::{EnvironmentValue, Expression, Literal, PropertyName, DEFAULT_MAP_SCALE};
pub use feature::Feature;
pub use filter::{Comparison, Filter, LogicFilter, NotFilter};
pub use function::{FunctionCall, FunctionKind};
pub use handler::FilterHandler;
pub use sort::{SortDirection, SortSpec};
pub use value::{Value, ValueType};
pub use visitor::{ExpressionVisitor, FilterVisitor};
