// src/filter.rs
//
// Filter engine: criteria in, order-preserving view out.
//
// - FilterCriteria: what the user asked for (query + selectors).
// - FilteredView: positions of matching records in the canonical Dataset.
//   Recomputed wholesale on every criteria change; never diffed.

use crate::model::{Dataset, Offering};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring; empty matches everything
    pub query: String,
    /// Exact match against the stored country; None or "" matches everything
    pub country: Option<String>,
    /// Exact match against the stored city; None or "" matches everything
    pub city: Option<String>,
}

impl FilterCriteria {
    pub fn with_query(mut self, q: impl Into<String>) -> Self { self.query = q.into(); self }
    pub fn with_country(mut self, c: impl Into<String>) -> Self { self.country = Some(c.into()); self }
    pub fn with_city(mut self, c: impl Into<String>) -> Self { self.city = Some(c.into()); self }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && selector(&self.country).is_none() && selector(&self.city).is_none()
    }
}

#[inline]
fn selector(sel: &Option<String>) -> Option<&str> {
    sel.as_deref().filter(|s| !s.is_empty())
}

/// Zero-copy filtered view. Holds ascending row indexes into the Dataset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilteredView {
    row_ix: Vec<usize>,
}

impl FilteredView {
    /// The unfiltered view: every record, in source order.
    pub fn all(ds: &Dataset) -> Self {
        Self { row_ix: (0..ds.len()).collect() }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// Dataset positions of the kept records, in order.
    pub fn indices(&self) -> &[usize] { &self.row_ix }

    /// Dataset position of the record at view position `i`.
    pub fn row(&self, i: usize) -> Option<usize> { self.row_ix.get(i).copied() }

    /// View position of dataset row `row`, if it survived the filter.
    pub fn position_of(&self, row: usize) -> Option<usize> {
        self.row_ix.binary_search(&row).ok()
    }

    /// Borrow the record at view position `i`.
    pub fn get<'a>(&self, ds: &'a Dataset, i: usize) -> Option<&'a Offering> {
        self.row(i).and_then(|ix| ds.get(ix))
    }

    pub fn iter<'a>(&'a self, ds: &'a Dataset) -> impl Iterator<Item = &'a Offering> + 'a {
        self.row_ix.iter().filter_map(move |&ix| ds.get(ix))
    }
}

/// Does `o` satisfy every clause? `needle` must already be lowercased.
fn matches(o: &Offering, needle: &str, country: Option<&str>, city: Option<&str>) -> bool {
    let search_ok = needle.is_empty()
        || o.searchable()
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle));

    let country_ok = country.is_none_or(|c| o.country() == Some(c));
    let city_ok = city.is_none_or(|c| o.city() == Some(c));

    search_ok && country_ok && city_ok
}

/// Evaluate `criteria` against the full dataset.
pub fn apply(ds: &Dataset, criteria: &FilterCriteria) -> FilteredView {
    if criteria.is_empty() {
        return FilteredView::all(ds);
    }

    let needle = criteria.query.to_lowercase();
    let country = selector(&criteria.country);
    let city = selector(&criteria.city);

    let row_ix = ds
        .iter()
        .enumerate()
        .filter(|(_, o)| matches(o, &needle, country, city))
        .map(|(ix, _)| ix)
        .collect();

    FilteredView { row_ix }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, city: &str, country: &str, body: &str) -> Offering {
        Offering::default().with_name(name).with_city(city).with_country(country).with_body(body)
    }

    #[test]
    fn selectors_are_exact_and_untrimmed() {
        let ds = Dataset::new(vec![rec("A", "Lima", "Peru ", ""), rec("B", "Lima", "Peru", "")]);
        let v = apply(&ds, &FilterCriteria::default().with_country("Peru"));
        assert_eq!(v.indices(), &[1]);
    }

    #[test]
    fn empty_selector_string_is_neutral() {
        let ds = Dataset::new(vec![rec("A", "", "Peru", ""), rec("B", "", "", "")]);
        let c = FilterCriteria { country: Some(s!()), ..Default::default() };
        assert!(c.is_empty());
        assert_eq!(apply(&ds, &c).len(), 2);
    }

    #[test]
    fn query_is_not_trimmed() {
        let ds = Dataset::new(vec![rec("Ana", "", "", ""), rec("Jo", "", "", "two words")]);
        let v = apply(&ds, &FilterCriteria::default().with_query(" "));
        assert_eq!(v.indices(), &[1]);
    }

    #[test]
    fn position_of_maps_back_from_rows() {
        let ds = Dataset::new(vec![rec("x", "", "", ""), rec("y", "", "", ""), rec("x", "", "", "")]);
        let v = apply(&ds, &FilterCriteria::default().with_query("x"));
        assert_eq!(v.position_of(2), Some(1));
        assert_eq!(v.position_of(1), None);
    }
}
