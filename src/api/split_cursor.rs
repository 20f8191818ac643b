use std::cmp::{Ordering};

///
/// A location in a keeping split
///
/// A split over a sequence with a separator at its end still has one more (empty) subsequence to
/// produce once the base sequence's own end index has been reached. The cursor therefore has a
/// separate `Terminal` variant to indicate that no subsequences remain, and `Position(end_index)`
/// is an ordinary cursor that reads the trailing empty subsequence.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SplitCursor<Index> {
    /// The start of a subsequence in the base sequence
    Position(Index),

    /// Every subsequence has been visited
    Terminal
}

impl<Index> SplitCursor<Index>
where
Index: Copy {
    ///
    /// The index into the base sequence for this cursor, or `None` for the terminal cursor
    ///
    #[inline]
    pub fn position(&self) -> Option<Index> {
        match self {
            SplitCursor::Position(index)    => Some(*index),
            SplitCursor::Terminal           => None
        }
    }

    ///
    /// True if this cursor indicates that traversal has finished
    ///
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, SplitCursor::Terminal)
    }
}

impl<Index> PartialOrd for SplitCursor<Index>
where
Index: Ord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Index> Ord for SplitCursor<Index>
where
Index: Ord {
    fn cmp(&self, other: &Self) -> Ordering {
        use self::SplitCursor::*;

        match (self, other) {
            (Position(lhs), Position(rhs))  => lhs.cmp(rhs),
            (Position(_), Terminal)         => Ordering::Less,
            (Terminal, Position(_))         => Ordering::Greater,
            (Terminal, Terminal)            => Ordering::Equal
        }
    }
}
