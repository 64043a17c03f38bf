// src/facets.rs
use std::collections::BTreeSet;

use crate::{core::sanitize::trimmed_nonempty, model::Dataset};

/// Distinct, sorted selector choices derived from the full dataset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub countries: Vec<String>,
    pub cities: Vec<String>,
}

/// Values are trimmed before dedup; blanks never become a choice.
/// Order is by code point, independent of locale.
pub fn derive_options(ds: &Dataset) -> FilterOptions {
    let mut countries = BTreeSet::new();
    let mut cities = BTreeSet::new();

    for o in ds.iter() {
        if let Some(c) = o.country().and_then(trimmed_nonempty) {
            countries.insert(s!(c));
        }
        if let Some(c) = o.city().and_then(trimmed_nonempty) {
            cities.insert(s!(c));
        }
    }

    logd!("Facets: {} countries, {} cities", countries.len(), cities.len());

    FilterOptions {
        countries: countries.into_iter().collect(),
        cities: cities.into_iter().collect(),
    }
}
