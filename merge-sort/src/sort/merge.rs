use std::cmp::Ordering;

use log::trace;

pub fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    merge_by(left, right, &mut T::cmp)
}

/// Merges two sorted vectors into one, appending to a single accumulator.
///
/// The head of `right` is only taken when it is strictly less than the head
/// of `left`, so equal elements keep left-before-right order.
pub fn merge_by<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("merging {} + {} elements", left.len(), right.len());

    let mut sorted = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        sorted.extend(next);
    }

    // at most one of these still has elements
    sorted.extend(left);
    sorted.extend(right);

    sorted
}

#[cfg(test)]
mod tests {
    use super::{merge, merge_by};
    use rstest::rstest;

    #[rstest]
    #[case(vec![], vec![], vec![])]
    #[case(vec![1, 2], vec![], vec![1, 2])]
    #[case(vec![], vec![1, 2], vec![1, 2])]
    #[case(vec![1, 3, 5], vec![2, 4, 6], vec![1, 2, 3, 4, 5, 6])]
    #[case(vec![4, 5, 6], vec![1, 2, 3], vec![1, 2, 3, 4, 5, 6])]
    #[case(vec![1, 1, 2], vec![1, 2, 2], vec![1, 1, 1, 2, 2, 2])]
    fn test_merge(#[case] left: Vec<i32>, #[case] right: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(merge(left, right), expected);
    }

    #[test]
    fn test_ties_favour_left() {
        let left = vec![(1, "l0"), (2, "l1")];
        let right = vec![(1, "r0"), (2, "r1")];

        let merged = merge_by(left, right, &mut |a, b| a.0.cmp(&b.0));

        assert_eq!(merged, vec![(1, "l0"), (1, "r0"), (2, "l1"), (2, "r1")]);
    }

    #[test]
    fn test_merge_large_inputs() {
        let evens = (0..200_000).step_by(2).collect::<Vec<u32>>();
        let odds = (1..200_000).step_by(2).collect::<Vec<u32>>();

        let merged = merge(evens, odds);

        assert_eq!(merged, (0..200_000).collect::<Vec<_>>());
    }
}
