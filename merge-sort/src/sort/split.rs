/// Splits `items` into two contiguous halves.
///
/// The left half holds the first `len / 2` elements, the right half the rest,
/// so for odd lengths the extra element lands on the right.
pub fn split<T>(mut items: Vec<T>) -> (Vec<T>, Vec<T>) {
    let middle = items.len() / 2;
    let right = items.split_off(middle);
    (items, right)
}
