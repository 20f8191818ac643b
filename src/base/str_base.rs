use crate::api::*;

use std::ops::{Range};

///
/// Strings are split by `char`. Indexes are byte offsets that always lie on a character boundary, so the
/// slices are ordinary `&str` values.
///
impl SplitBase for str {
    type Item           = char;
    type Index          = usize;
    type Slice<'a>      = &'a str where Self: 'a;

    #[inline]
    fn start_index(&self) -> usize {
        0
    }

    #[inline]
    fn end_index(&self) -> usize {
        self.len()
    }

    fn index_after(&self, index: usize) -> usize {
        let next_char = self[index..].chars().next();
        index + next_char.map(char::len_utf8).unwrap_or(0)
    }

    fn first_index_where<Predicate>(&self, from: usize, mut predicate: Predicate) -> Option<usize>
    where
    Predicate: FnMut(&char) -> bool {
        self[from..].char_indices()
            .find(|(_, chr)| predicate(chr))
            .map(|(offset, _)| from + offset)
    }

    #[inline]
    fn slice<'a>(&'a self, range: Range<usize>) -> &'a str {
        &self[range]
    }
}

impl BidirectionalSplitBase for str {
    fn index_before(&self, index: usize) -> usize {
        let previous_char = self[..index].chars().next_back();
        index - previous_char.map(char::len_utf8).unwrap_or(0)
    }

    fn last_index_where<Predicate>(&self, before: usize, mut predicate: Predicate) -> Option<usize>
    where
    Predicate: FnMut(&char) -> bool {
        self[..before].char_indices()
            .rev()
            .find(|(_, chr)| predicate(chr))
            .map(|(index, _)| index)
    }
}
