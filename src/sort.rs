//! Sort specification
//!
//! A property/direction pair consumed by an external ordering stage. Inert:
//! no evaluation logic lives here.

use serde::{Deserialize, Serialize};

use crate::expression::PropertyName;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Ordering requirement on a single property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    property: PropertyName,
    direction: SortDirection,
}

impl SortSpec {
    /// Create a sort specification
    pub fn new(property: PropertyName, direction: SortDirection) -> Self {
        Self {
            property,
            direction,
        }
    }

    /// Create an ascending sort specification
    pub fn asc(property: PropertyName) -> Self {
        Self::new(property, SortDirection::Ascending)
    }

    /// Create a descending sort specification
    pub fn desc(property: PropertyName) -> Self {
        Self::new(property, SortDirection::Descending)
    }

    /// Property to order by
    pub fn property(&self) -> &PropertyName {
        &self.property
    }

    /// Sort direction
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Replace the ordered property
    pub fn set_property(&mut self, property: PropertyName) {
        self.property = property;
    }

    /// Replace the direction
    pub fn set_direction(&mut self, direction: SortDirection) {
        self.direction = direction;
    }
}
