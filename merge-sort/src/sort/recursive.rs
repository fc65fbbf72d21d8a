//! Naive recursive merge.
//!
//! Every merged element costs one stack frame: the smaller head is taken,
//! the rest is merged recursively and the head is prepended to that result.
//! Call depth therefore grows with `left.len() + right.len()`, which is why
//! inputs longer than the configured limit are refused up front instead of
//! risking a stack overflow. Use [`super::merge`] for anything large.
//!
//! The limit counts elements, not bytes. Each frame holds one element, so
//! the default only keeps the depth safe for small element types; sort
//! large values behind a `Box` or use the accumulator merge.

use std::{cmp::Ordering, collections::VecDeque, iter::Peekable, vec};

use log::{trace, warn};

use crate::error::SortError;

/// Default number of elements the recursive merge accepts.
pub const RECURSIVE_MERGE_LIMIT: usize = 4096;

/// Upper bound for any configured limit.
pub const RECURSIVE_MERGE_MAX_LIMIT: usize = 16_384;

type Cursor<T> = Peekable<vec::IntoIter<T>>;

/// Fails when `len` elements exceed `limit`, which is itself capped at
/// [`RECURSIVE_MERGE_MAX_LIMIT`].
pub fn check_limit(len: usize, limit: usize) -> Result<(), SortError> {
    let limit = limit.min(RECURSIVE_MERGE_MAX_LIMIT);
    if len > limit {
        warn!("refusing recursive merge of {len} elements, limit is {limit}");
        return Err(SortError::RecursionLimit { len, limit });
    }
    Ok(())
}

pub fn merge<T: Ord>(left: Vec<T>, right: Vec<T>, limit: usize) -> Result<Vec<T>, SortError> {
    merge_by(left, right, &mut T::cmp, limit)
}

pub fn merge_by<T, F>(
    left: Vec<T>,
    right: Vec<T>,
    compare: &mut F,
    limit: usize,
) -> Result<Vec<T>, SortError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    check_limit(left.len() + right.len(), limit)?;
    trace!("merging {} + {} elements recursively", left.len(), right.len());

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    Ok(Vec::from(merge_rest(&mut left, &mut right, compare)))
}

fn merge_rest<T, F>(left: &mut Cursor<T>, right: &mut Cursor<T>, compare: &mut F) -> VecDeque<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let take_right = match (left.peek(), right.peek()) {
        (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
        _ => return left.by_ref().chain(right.by_ref()).collect(),
    };
    let head = if take_right { right.next() } else { left.next() };

    let mut rest = merge_rest(left, right, compare);
    if let Some(head) = head {
        rest.push_front(head);
    }
    rest
}
