//! Filter-consumer callback
//!
//! A parsing front end (or any other filter producer) delivers each
//! completed filter through this single-method callback, decoupling
//! production of filters from their evaluation.

use crate::filter::Filter;

/// Receiver of fully-constructed filters
pub trait FilterHandler {
    /// Accept a completed filter
    fn handle_filter(&mut self, filter: Filter);
}

/// Collect-all receiver
impl FilterHandler for Vec<Filter> {
    fn handle_filter(&mut self, filter: Filter) {
        self.push(filter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::CompareOp;
    use crate::expression::Expression;
    use crate::value::Value;

    #[test]
    fn test_vec_collects_filters() {
        let mut sink: Vec<Filter> = Vec::new();
        let filter = Filter::comparison(
            CompareOp::Equal,
            Expression::property("a"),
            Expression::literal(Value::Long(1)),
            true,
        );
        sink.handle_filter(filter.clone());
        sink.handle_filter(filter);
        assert_eq!(sink.len(), 2);
    }
}
