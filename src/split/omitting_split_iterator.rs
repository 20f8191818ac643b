use super::keeping_split_iterator::*;

use crate::api::*;

use std::iter::{FusedIterator};

///
/// Iterator that reads only the non-empty subsequences of a keeping split
///
/// This produces the same results as a conventional split that discards empty subsequences.
///
pub struct OmittingSplitIterator<'a, Base, IsSeparator>
where
Base: ?Sized+SplitBase {
    /// The iterator that reads every subsequence
    keeping: KeepingSplitIterator<'a, Base, IsSeparator>
}

impl<'a, Base, IsSeparator> OmittingSplitIterator<'a, Base, IsSeparator>
where
Base:           ?Sized+SplitBase,
IsSeparator:    Fn(&Base::Item) -> bool {
    ///
    /// Filters the empty subsequences out of a keeping iterator
    ///
    pub fn from(keeping: KeepingSplitIterator<'a, Base, IsSeparator>) -> OmittingSplitIterator<'a, Base, IsSeparator> {
        OmittingSplitIterator {
            keeping: keeping
        }
    }
}

impl<'a, Base, IsSeparator> Iterator for OmittingSplitIterator<'a, Base, IsSeparator>
where
Base:           ?Sized+SplitBase,
IsSeparator:    Fn(&Base::Item) -> bool {
    type Item = Base::Slice<'a>;

    fn next(&mut self) -> Option<Base::Slice<'a>> {
        loop {
            let range = self.keeping.next_range()?;

            if range.start != range.end {
                return Some(self.keeping.split.base.slice(range));
            }
        }
    }
}

impl<'a, Base, IsSeparator> DoubleEndedIterator for OmittingSplitIterator<'a, Base, IsSeparator>
where
Base:           ?Sized+BidirectionalSplitBase,
IsSeparator:    Fn(&Base::Item) -> bool {
    fn next_back(&mut self) -> Option<Base::Slice<'a>> {
        loop {
            let range = self.keeping.next_back_range()?;

            if range.start != range.end {
                return Some(self.keeping.split.base.slice(range));
            }
        }
    }
}

impl<'a, Base, IsSeparator> FusedIterator for OmittingSplitIterator<'a, Base, IsSeparator>
where
Base:           ?Sized+SplitBase,
IsSeparator:    Fn(&Base::Item) -> bool {
}
