//! Typed filter criteria for product listing.
//!
//! Query-string filters are lowered into an explicit conjunction of
//! [`FilterCriterion`] values before any storage backend is consulted, so
//! both the Postgres and in-memory repositories apply exactly the same
//! predicate set.

use crate::models::{Category, Product, ProductFilter};

/// A single equality predicate applied when listing products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCriterion {
    /// Exact match on the product name.
    Name(String),
    /// Membership in a category.
    Category(Category),
    /// Exact match on the availability flag.
    Available(bool),
}

impl FilterCriterion {
    /// Whether a product satisfies this criterion.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            FilterCriterion::Name(name) => product.name == *name,
            FilterCriterion::Category(category) => product.category == *category,
            FilterCriterion::Available(available) => product.available == *available,
        }
    }
}

impl ProductFilter {
    /// Lower the filter into its conjunction of criteria.
    ///
    /// An empty vector means no restriction: every product matches.
    pub fn criteria(&self) -> Vec<FilterCriterion> {
        let mut criteria = Vec::new();

        if let Some(ref name) = self.name {
            criteria.push(FilterCriterion::Name(name.clone()));
        }
        if let Some(category) = self.category {
            criteria.push(FilterCriterion::Category(category));
        }
        if let Some(available) = self.available {
            criteria.push(FilterCriterion::Available(available));
        }

        criteria
    }
}
