//! Feature accessor contract
//!
//! The engine never sees the record data model directly; it reaches property
//! values only through this trait. An absent property is a defined `None`,
//! which comparison evaluation turns into a `false` predicate result.

use std::collections::HashMap;

use crate::value::Value;

/// Opaque data record evaluated by filters and expressions
pub trait Feature {
    /// Look up a property by name, returning `None` when absent
    fn property(&self, name: &str) -> Option<Value>;
}

impl Feature for HashMap<String, Value> {
    fn property(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl<F: Feature + ?Sized> Feature for &F {
    fn property(&self, name: &str) -> Option<Value> {
        (**self).property(name)
    }
}
