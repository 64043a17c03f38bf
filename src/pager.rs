// src/pager.rs
use std::ops::Range;

use crate::config::consts::NO_MATCHES_MSG;
use crate::filter::FilteredView;

/// Visibility of the two status regions under the card grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Indicators {
    pub no_results: bool,
    pub loading: bool,
}

/// Tracks how much of the filtered view is materialized.
///
/// The cursor never runs past the view length, and only moves backwards
/// through `reset`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
    len: usize,
    cursor: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self { page_size: page_size.max(1), len: 0, cursor: 0 }
    }

    /// New view: nothing materialized yet.
    pub fn reset(&mut self, view: &FilteredView) {
        self.len = view.len();
        self.cursor = 0;
    }

    /// Materialize the next page. Returns the newly visible view positions;
    /// empty once everything is shown.
    pub fn load_more(&mut self) -> Range<usize> {
        let start = self.cursor;
        let end = (start + self.page_size).min(self.len);
        self.cursor = end;
        start..end
    }

    pub fn has_more(&self) -> bool { self.cursor < self.len }
    pub fn cursor(&self) -> usize { self.cursor }
    pub fn len(&self) -> usize { self.len }
    pub fn is_empty(&self) -> bool { self.len == 0 }
    pub fn page_size(&self) -> usize { self.page_size }

    /// Materialized range of view positions.
    pub fn visible(&self) -> Range<usize> { 0..self.cursor }

    pub fn indicators(&self) -> Indicators {
        Indicators {
            no_results: self.len == 0,
            loading: self.has_more(),
        }
    }
}

/// Results-count line above the grid.
pub fn results_count(shown: usize, matches: usize, total: usize) -> String {
    let shown = shown.min(matches);
    if matches == 0 {
        s!(NO_MATCHES_MSG)
    } else if matches == total {
        format!("Showing {shown} of {matches} offerings")
    } else {
        format!("Showing {shown} of {matches} filtered offerings ({total} total)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_count_variants() {
        assert_eq!(results_count(0, 0, 10), "No offerings found");
        assert_eq!(results_count(50, 120, 120), "Showing 50 of 120 offerings");
        assert_eq!(results_count(7, 7, 120), "Showing 7 of 7 filtered offerings (120 total)");
    }

    #[test]
    fn zero_page_size_is_clamped() {
        assert_eq!(Pager::new(0).page_size(), 1);
    }
}
