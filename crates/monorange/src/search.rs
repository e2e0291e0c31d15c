use crate::Direction;

/// Floor search over a monotonic sequence.
///
/// Ascending: greatest `k` with `sequence[k] <= value`.
/// Descending: greatest `k` with `sequence[k] >= value`.
///
/// Returns `None` when no element qualifies, including when `value` is
/// incomparable (NaN).
pub fn floor_index<T: PartialOrd>(
    sequence: &[T],
    direction: Direction,
    value: &T,
) -> Option<usize> {
    let count = match direction {
        Direction::Ascending => sequence.partition_point(|x| x <= value),
        Direction::Descending => sequence.partition_point(|x| x >= value),
    };
    count.checked_sub(1)
}
