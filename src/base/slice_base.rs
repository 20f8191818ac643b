use crate::api::*;

use std::ops::{Range};

impl<T> SplitBase for [T] {
    type Item           = T;
    type Index          = usize;
    type Slice<'a>      = &'a [T] where Self: 'a;

    #[inline]
    fn start_index(&self) -> usize {
        0
    }

    #[inline]
    fn end_index(&self) -> usize {
        self.len()
    }

    #[inline]
    fn index_after(&self, index: usize) -> usize {
        index + 1
    }

    fn first_index_where<Predicate>(&self, from: usize, predicate: Predicate) -> Option<usize>
    where
    Predicate: FnMut(&T) -> bool {
        self[from..].iter()
            .position(predicate)
            .map(|offset| from + offset)
    }

    #[inline]
    fn slice<'a>(&'a self, range: Range<usize>) -> &'a [T] {
        &self[range]
    }
}

impl<T> BidirectionalSplitBase for [T] {
    #[inline]
    fn index_before(&self, index: usize) -> usize {
        index - 1
    }

    fn last_index_where<Predicate>(&self, before: usize, predicate: Predicate) -> Option<usize>
    where
    Predicate: FnMut(&T) -> bool {
        self[..before].iter().rposition(predicate)
    }
}
