use std::cmp::Ordering;

use log::debug;

use crate::error::SortError;

pub mod merge;
pub mod recursive;
pub mod split;

pub use recursive::{RECURSIVE_MERGE_LIMIT, RECURSIVE_MERGE_MAX_LIMIT};

/// How two sorted halves are merged back together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Iterative merge into a single accumulator. No size limit.
    #[default]
    Accumulator,
    /// One call frame per merged element, bounded by the recursion limit.
    Recursive,
}

pub fn sort<T: Ord>(items: Vec<T>) -> Vec<T> {
    sort_by(items, T::cmp)
}

pub fn sort_by<T, F>(items: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug!("sorting {} elements", items.len());
    sort_accumulating(items, &mut compare)
}

pub fn sort_by_key<T, K, F>(items: Vec<T>, mut key: F) -> Vec<T>
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    sort_by(items, |a, b| key(a).cmp(&key(b)))
}

fn sort_accumulating<T, F>(items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return items;
    }

    let (left, right) = split::split(items);
    let left = sort_accumulating(left, compare);
    let right = sort_accumulating(right, compare);

    merge::merge_by(left, right, compare)
}

fn sort_recursive<T, F>(items: Vec<T>, compare: &mut F, limit: usize) -> Result<Vec<T>, SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return Ok(items);
    }

    let (left, right) = split::split(items);
    let left = sort_recursive(left, compare, limit)?;
    let right = sort_recursive(right, compare, limit)?;

    recursive::merge_by(left, right, compare, limit)
}

/// A merge sort with a chosen [`Strategy`].
///
/// The free functions [`sort`], [`sort_by`] and [`sort_by_key`] always use
/// [`Strategy::Accumulator`] and cannot fail. A `Sorter` set to
/// [`Strategy::Recursive`] rejects inputs longer than its recursion limit
/// before doing any work. Empty and single element inputs need no merge and
/// are always accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sorter {
    strategy: Strategy,
    recursion_limit: usize,
}

impl Default for Sorter {
    fn default() -> Self {
        Sorter::new(Strategy::default())
    }
}

impl Sorter {
    pub fn new(strategy: Strategy) -> Self {
        Sorter {
            strategy,
            recursion_limit: RECURSIVE_MERGE_LIMIT,
        }
    }

    /// Sets the largest input the recursive strategy accepts, capped at
    /// [`RECURSIVE_MERGE_MAX_LIMIT`].
    pub fn with_recursion_limit(self, recursion_limit: usize) -> Self {
        Sorter {
            recursion_limit: recursion_limit.min(RECURSIVE_MERGE_MAX_LIMIT),
            ..self
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn recursion_limit(&self) -> usize {
        self.recursion_limit
    }

    pub fn sort<T: Ord>(&self, items: Vec<T>) -> Result<Vec<T>, SortError> {
        self.sort_by(items, T::cmp)
    }

    pub fn sort_by<T, F>(&self, items: Vec<T>, mut compare: F) -> Result<Vec<T>, SortError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        debug!(
            "sorting {} elements with the {:?} strategy",
            items.len(),
            self.strategy
        );

        match self.strategy {
            Strategy::Accumulator => Ok(sort_accumulating(items, &mut compare)),
            Strategy::Recursive if items.len() < 2 => Ok(items),
            Strategy::Recursive => {
                // the top level merge is the deepest, so one check covers every level
                recursive::check_limit(items.len(), self.recursion_limit)?;
                sort_recursive(items, &mut compare, self.recursion_limit)
            }
        }
    }
}
