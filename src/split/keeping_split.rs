use super::keeping_split_iterator::*;
use super::omitting_split_iterator::*;

use crate::api::*;

use std::ops::{Range};

///
/// A lazy view of a sequence, split into the subsequences between the items that match a separator
/// predicate. Unlike most split functions, empty subsequences are kept: a sequence with `n` separators
/// always splits into `n+1` subsequences.
///
/// The view stores only the base sequence and the predicate. Every cursor operation recalculates its
/// result from these, so cursors can be freely copied, compared and replayed.
///
pub struct KeepingSplit<'a, Base, IsSeparator>
where
Base: ?Sized {
    /// The sequence that's being split
    pub (super) base: &'a Base,

    /// Returns true for the items that separate subsequences
    pub (super) is_separator: IsSeparator
}

impl<'a, Base, IsSeparator> Clone for KeepingSplit<'a, Base, IsSeparator>
where
Base:           ?Sized,
IsSeparator:    Clone {
    fn clone(&self) -> Self {
        KeepingSplit {
            base:           self.base,
            is_separator:   self.is_separator.clone()
        }
    }
}

impl<'a, Base, IsSeparator> Copy for KeepingSplit<'a, Base, IsSeparator>
where
Base:           ?Sized,
IsSeparator:    Copy {
}

impl<'a, Base, IsSeparator> KeepingSplit<'a, Base, IsSeparator>
where
Base:           ?Sized+SplitBase,
IsSeparator:    Fn(&Base::Item) -> bool {
    ///
    /// Creates a split of a base sequence, using a predicate to decide which items are separators
    ///
    pub fn from(base: &'a Base, is_separator: IsSeparator) -> KeepingSplit<'a, Base, IsSeparator> {
        KeepingSplit {
            base:           base,
            is_separator:   is_separator
        }
    }

    ///
    /// The sequence that this is splitting
    ///
    #[inline]
    pub fn base(&self) -> &'a Base {
        self.base
    }

    ///
    /// The cursor for the first subsequence
    ///
    #[inline]
    pub fn start_cursor(&self) -> SplitCursor<Base::Index> {
        SplitCursor::Position(self.base.start_index())
    }

    ///
    /// The cursor that follows the last subsequence
    ///
    #[inline]
    pub fn end_sentinel(&self) -> SplitCursor<Base::Index> {
        SplitCursor::Terminal
    }

    ///
    /// Returns the first separator at or after the specified index
    ///
    #[inline]
    fn first_separator(&self, from: Base::Index) -> Option<Base::Index> {
        self.base.first_index_where(from, &self.is_separator)
    }

    ///
    /// Returns the range of the base sequence covered by the subsequence at the specified cursor
    ///
    /// The cursor must not be the terminal cursor: this will panic if it is.
    ///
    pub fn range_at(&self, cursor: SplitCursor<Base::Index>) -> Range<Base::Index> {
        let start   = match cursor {
            SplitCursor::Position(index)    => index,
            SplitCursor::Terminal           => panic!("{}", SplitError::TerminalCursor)
        };
        let end     = self.base.end_index();

        if start == end {
            // The empty subsequence following a separator at the end of the sequence
            end..end
        } else {
            start..self.first_separator(start).unwrap_or(end)
        }
    }

    ///
    /// Reads the subsequence at the specified cursor
    ///
    /// The cursor must not be the terminal cursor: this will panic if it is. Use `try_slice_at()` when the
    /// cursor has not come from a traversal.
    ///
    #[inline]
    pub fn slice_at(&self, cursor: SplitCursor<Base::Index>) -> Base::Slice<'a> {
        self.base.slice(self.range_at(cursor))
    }

    ///
    /// Reads the subsequence at the specified cursor, returning an error for the terminal cursor
    ///
    pub fn try_slice_at(&self, cursor: SplitCursor<Base::Index>) -> Result<Base::Slice<'a>, SplitError> {
        if cursor.is_terminal() {
            tracing::trace!("Rejected read at the terminal cursor");
            Err(SplitError::TerminalCursor)
        } else {
            Ok(self.slice_at(cursor))
        }
    }

    ///
    /// Returns the cursor for the subsequence following the one at the specified cursor
    ///
    /// A separator at the end of the base sequence produces `Position(end_index)` here: this reads as
    /// the final, empty, subsequence. The terminal cursor is only returned once that has been passed.
    ///
    pub fn advance(&self, cursor: SplitCursor<Base::Index>) -> SplitCursor<Base::Index> {
        match cursor {
            SplitCursor::Terminal                                           => SplitCursor::Terminal,
            SplitCursor::Position(index) if index == self.base.end_index()  => SplitCursor::Terminal,

            SplitCursor::Position(index) => {
                match self.first_separator(index) {
                    Some(separator) => SplitCursor::Position(self.base.index_after(separator)),
                    None            => SplitCursor::Terminal
                }
            }
        }
    }

    ///
    /// Iterates over the subsequences in this split
    ///
    /// Each call starts a new traversal from the start cursor.
    ///
    pub fn iter(&self) -> KeepingSplitIterator<'a, Base, &IsSeparator> {
        KeepingSplitIterator::from(KeepingSplit {
            base:           self.base,
            is_separator:   &self.is_separator
        })
    }

    ///
    /// Iterates over the non-empty subsequences in this split (the result of a conventional split that
    /// discards empty subsequences)
    ///
    pub fn omitting_empty(&self) -> OmittingSplitIterator<'a, Base, &IsSeparator> {
        OmittingSplitIterator::from(self.iter())
    }
}

impl<'a, Base, IsSeparator> KeepingSplit<'a, Base, IsSeparator>
where
Base:           ?Sized+BidirectionalSplitBase,
IsSeparator:    Fn(&Base::Item) -> bool {
    ///
    /// Returns the cursor for the subsequence preceding the one at the specified cursor
    ///
    /// The cursor must have been reached by advancing from the start cursor (or be the result of
    /// `last_cursor()`). The terminal cursor carries no position, so retreating from it returns the
    /// terminal cursor: use `last_cursor()` to start a backwards traversal. Retreating from the start
    /// cursor returns the start cursor.
    ///
    pub fn retreat(&self, cursor: SplitCursor<Base::Index>) -> SplitCursor<Base::Index> {
        let start = self.base.start_index();

        match cursor {
            SplitCursor::Terminal                           => SplitCursor::Terminal,
            SplitCursor::Position(index) if index <= start  => SplitCursor::Position(start),

            SplitCursor::Position(index) => {
                // Skip the separator that ends the preceding subsequence, then find the one before that
                let preceding_separator = self.base.index_before(index);

                match self.base.last_index_where(preceding_separator, &self.is_separator) {
                    Some(separator) => SplitCursor::Position(self.base.index_after(separator)),
                    None            => SplitCursor::Position(start)
                }
            }
        }
    }

    ///
    /// As for `retreat()`, but returns an error instead of saturating at either end of the split
    ///
    pub fn try_retreat(&self, cursor: SplitCursor<Base::Index>) -> Result<SplitCursor<Base::Index>, SplitError> {
        match cursor {
            SplitCursor::Terminal => {
                tracing::trace!("Rejected retreat from the terminal cursor");
                Err(SplitError::TerminalCursor)
            }

            SplitCursor::Position(index) if index <= self.base.start_index() => {
                tracing::trace!("Rejected retreat from the start cursor");
                Err(SplitError::RetreatBeforeStart)
            }

            cursor => Ok(self.retreat(cursor))
        }
    }

    ///
    /// The cursor for the last subsequence (the one that advances to the terminal cursor)
    ///
    pub fn last_cursor(&self) -> SplitCursor<Base::Index> {
        match self.base.last_index_where(self.base.end_index(), &self.is_separator) {
            Some(separator) => SplitCursor::Position(self.base.index_after(separator)),
            None            => self.start_cursor()
        }
    }
}

impl<'a, Base, IsSeparator> IntoIterator for KeepingSplit<'a, Base, IsSeparator>
where
Base:           ?Sized+SplitBase,
IsSeparator:    Fn(&Base::Item) -> bool {
    type Item       = Base::Slice<'a>;
    type IntoIter   = KeepingSplitIterator<'a, Base, IsSeparator>;

    fn into_iter(self) -> Self::IntoIter {
        KeepingSplitIterator::from(self)
    }
}

impl<'s, 'a, Base, IsSeparator> IntoIterator for &'s KeepingSplit<'a, Base, IsSeparator>
where
Base:           ?Sized+SplitBase,
IsSeparator:    Fn(&Base::Item) -> bool {
    type Item       = Base::Slice<'a>;
    type IntoIter   = KeepingSplitIterator<'a, Base, &'s IsSeparator>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
