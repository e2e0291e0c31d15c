use std::cmp::Ordering;

/// Ordering of a monotonic sequence or of a requested interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// Direction of a monotonic sequence, judged from its first two values.
    ///
    /// Sequences shorter than two count as ascending. Equal leading values
    /// count as descending.
    pub fn of_sequence<T: PartialOrd>(sequence: &[T]) -> Self {
        match sequence {
            [first, second, ..] => match second.partial_cmp(first) {
                Some(Ordering::Greater) => Self::Ascending,
                _ => Self::Descending,
            },
            _ => Self::Ascending,
        }
    }

    /// Direction of a `[bound_a, bound_b]` request: descending iff `a > b`.
    pub fn of_interval<T: PartialOrd>(bound_a: &T, bound_b: &T) -> Self {
        if bound_a > bound_b {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    #[inline]
    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }

    #[inline]
    pub fn is_descending(self) -> bool {
        self == Self::Descending
    }
}

/// Sign of the index step used to walk a resolved range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stride {
    /// `+1`
    Forward,
    /// `-1`
    Backward,
}

impl Stride {
    /// Forward when the sequence and the interval run the same way,
    /// backward otherwise.
    pub fn between(sequence: Direction, interval: Direction) -> Self {
        if sequence == interval {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    #[inline]
    pub fn as_isize(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

impl From<Stride> for isize {
    fn from(value: Stride) -> isize {
        value.as_isize()
    }
}
