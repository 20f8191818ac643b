use super::keeping_split::*;

use crate::api::*;

///
/// Splits a sequence at every item that matches a predicate, keeping empty subsequences
///
pub fn split_keeping_empty<'a, Base, IsSeparator>(base: &'a Base, is_separator: IsSeparator) -> KeepingSplit<'a, Base, IsSeparator>
where
Base:           ?Sized+SplitBase,
IsSeparator:    Fn(&Base::Item) -> bool {
    KeepingSplit::from(base, is_separator)
}

///
/// Splits a sequence at every item equal to a separator, keeping empty subsequences
///
pub fn split_keeping_empty_on<'a, Base>(base: &'a Base, separator: Base::Item) -> KeepingSplit<'a, Base, impl Fn(&Base::Item) -> bool>
where
Base:       ?Sized+SplitBase,
Base::Item: PartialEq {
    KeepingSplit::from(base, move |item: &Base::Item| *item == separator)
}

///
/// Provides the keeping split functions as methods on any sequence that can be split
///
/// ```
/// use flo_split::*;
///
/// let parts = "a..b.".split_keeping_empty_on('.').iter().collect::<Vec<_>>();
/// assert!(parts == vec!["a", "", "b", ""]);
/// ```
///
pub trait SplitKeepingEmpty : SplitBase {
    ///
    /// Splits this sequence at every item that matches a predicate, keeping empty subsequences
    ///
    fn split_keeping_empty<IsSeparator>(&self, is_separator: IsSeparator) -> KeepingSplit<'_, Self, IsSeparator>
    where
    IsSeparator: Fn(&Self::Item) -> bool;

    ///
    /// Splits this sequence at every item equal to a separator, keeping empty subsequences
    ///
    fn split_keeping_empty_on(&self, separator: Self::Item) -> KeepingSplit<'_, Self, impl Fn(&Self::Item) -> bool>
    where
    Self::Item: PartialEq;
}

impl<Base> SplitKeepingEmpty for Base
where
Base: ?Sized+SplitBase {
    #[inline]
    fn split_keeping_empty<IsSeparator>(&self, is_separator: IsSeparator) -> KeepingSplit<'_, Self, IsSeparator>
    where
    IsSeparator: Fn(&Self::Item) -> bool {
        split_keeping_empty(self, is_separator)
    }

    #[inline]
    fn split_keeping_empty_on(&self, separator: Self::Item) -> KeepingSplit<'_, Self, impl Fn(&Self::Item) -> bool>
    where
    Self::Item: PartialEq {
        split_keeping_empty_on(self, separator)
    }
}
