use super::keeping_split::*;

use crate::api::*;

use std::iter::{FusedIterator};
use std::ops::{Range};

///
/// Iterator that reads the subsequences of a keeping split, from either end
///
pub struct KeepingSplitIterator<'a, Base, IsSeparator>
where
Base: ?Sized+SplitBase {
    /// The split that's being read
    pub (super) split: KeepingSplit<'a, Base, IsSeparator>,

    /// The cursor of the next subsequence to read from the front
    front: SplitCursor<Base::Index>,

    /// The cursor of the next subsequence to read from the back (or `None` if nothing has been read from the back yet)
    back: Option<SplitCursor<Base::Index>>,

    /// Set once the front and back have met
    finished: bool
}

impl<'a, Base, IsSeparator> KeepingSplitIterator<'a, Base, IsSeparator>
where
Base:           ?Sized+SplitBase,
IsSeparator:    Fn(&Base::Item) -> bool {
    ///
    /// Creates an iterator that starts at the first subsequence of a split
    ///
    pub fn from(split: KeepingSplit<'a, Base, IsSeparator>) -> KeepingSplitIterator<'a, Base, IsSeparator> {
        let front = split.start_cursor();

        KeepingSplitIterator {
            split:      split,
            front:      front,
            back:       None,
            finished:   false
        }
    }

    ///
    /// Reads the range of the next subsequence from the front
    ///
    pub (super) fn next_range(&mut self) -> Option<Range<Base::Index>> {
        if self.finished || self.front.is_terminal() {
            return None;
        }

        let front = self.front;
        let range = self.split.range_at(front);

        if Some(front) == self.back {
            self.finished   = true;
        } else {
            self.front      = self.split.advance(front);
            self.finished   = self.front.is_terminal();
        }

        Some(range)
    }
}

impl<'a, Base, IsSeparator> KeepingSplitIterator<'a, Base, IsSeparator>
where
Base:           ?Sized+BidirectionalSplitBase,
IsSeparator:    Fn(&Base::Item) -> bool {
    ///
    /// Reads the range of the next subsequence from the back
    ///
    pub (super) fn next_back_range(&mut self) -> Option<Range<Base::Index>> {
        if self.finished {
            return None;
        }

        let back    = self.back.unwrap_or_else(|| self.split.last_cursor());
        let range   = self.split.range_at(back);

        if back == self.front {
            self.finished   = true;
        } else {
            self.back       = Some(self.split.retreat(back));
        }

        Some(range)
    }
}

impl<'a, Base, IsSeparator> Iterator for KeepingSplitIterator<'a, Base, IsSeparator>
where
Base:           ?Sized+SplitBase,
IsSeparator:    Fn(&Base::Item) -> bool {
    type Item = Base::Slice<'a>;

    #[inline]
    fn next(&mut self) -> Option<Base::Slice<'a>> {
        let range = self.next_range()?;
        Some(self.split.base.slice(range))
    }
}

impl<'a, Base, IsSeparator> DoubleEndedIterator for KeepingSplitIterator<'a, Base, IsSeparator>
where
Base:           ?Sized+BidirectionalSplitBase,
IsSeparator:    Fn(&Base::Item) -> bool {
    #[inline]
    fn next_back(&mut self) -> Option<Base::Slice<'a>> {
        let range = self.next_back_range()?;
        Some(self.split.base.slice(range))
    }
}

impl<'a, Base, IsSeparator> FusedIterator for KeepingSplitIterator<'a, Base, IsSeparator>
where
Base:           ?Sized+SplitBase,
IsSeparator:    Fn(&Base::Item) -> bool {
}
