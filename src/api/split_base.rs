use std::ops::{Range};

///
/// Represents an ordered, read-only sequence that can be split into subsequences
///
/// The sequence is addressed by an ordered index type. `end_index()` is the index 'one past the end'
/// of the sequence: it is never the location of an item, but it is a valid place to start or end a
/// subsequence.
///
pub trait SplitBase {
    /// An item in the sequence. For a string this is a `char`
    type Item;

    /// The index type used to address items in this sequence
    type Index: Copy+Ord;

    /// A read-only view of a range of this sequence
    type Slice<'a> where Self: 'a;

    ///
    /// The index of the first item in the sequence (the same as the end index if the sequence is empty)
    ///
    fn start_index(&self) -> Self::Index;

    ///
    /// The index one past the last item in the sequence
    ///
    fn end_index(&self) -> Self::Index;

    ///
    /// Returns the index of the item immediately following the item at the specified index
    ///
    /// `index` must address an item (ie, must not be the end index)
    ///
    fn index_after(&self, index: Self::Index) -> Self::Index;

    ///
    /// Finds the first index at or after `from` where the item matches the predicate
    ///
    fn first_index_where<Predicate>(&self, from: Self::Index, predicate: Predicate) -> Option<Self::Index>
    where
    Predicate: FnMut(&Self::Item) -> bool;

    ///
    /// Reads a range of this sequence without copying it
    ///
    fn slice<'a>(&'a self, range: Range<Self::Index>) -> Self::Slice<'a>;
}

///
/// A sequence that can also be efficiently read from back to front
///
pub trait BidirectionalSplitBase : SplitBase {
    ///
    /// Returns the index of the item immediately preceding the specified index
    ///
    /// `index` must be after the start index
    ///
    fn index_before(&self, index: Self::Index) -> Self::Index;

    ///
    /// Searches the range `start_index()..before` from back to front, returning the index of the first
    /// item (ie, the last in sequence order) that matches the predicate
    ///
    fn last_index_where<Predicate>(&self, before: Self::Index, predicate: Predicate) -> Option<Self::Index>
    where
    Predicate: FnMut(&Self::Item) -> bool;
}
