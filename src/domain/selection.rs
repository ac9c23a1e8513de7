//! Post-hoc narrowing and one-at-a-time traversal of search results.

use crate::domain::entities::AnimalRecord;
use std::iter::FusedIterator;
use std::slice;

/// Keeps only the animals classified as `Senior`, preserving their order.
///
/// An empty result is a normal outcome. Applying the filter to its own output
/// returns the same list.
pub fn filter_seniors(animals: Vec<AnimalRecord>) -> Vec<AnimalRecord> {
    let seniors: Vec<AnimalRecord> = animals.into_iter().filter(|a| a.is_senior()).collect();

    if seniors.is_empty() {
        tracing::info!("No senior pets in user selection");
    }

    seniors
}

/// Yields the animals of an already fetched list one at a time, in order.
///
/// Never re-fetches: calling it again on the same slice starts a fresh pass.
pub fn iterate_lazily(animals: &[AnimalRecord]) -> AnimalCursor<'_> {
    AnimalCursor {
        inner: animals.iter(),
    }
}

/// Iterator returned by [`iterate_lazily`].
#[derive(Debug, Clone)]
pub struct AnimalCursor<'a> {
    inner: slice::Iter<'a, AnimalRecord>,
}

impl<'a> Iterator for AnimalCursor<'a> {
    type Item = &'a AnimalRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for AnimalCursor<'_> {}

impl FusedIterator for AnimalCursor<'_> {}
