//!
//! # Keeping splits
//!
//! A keeping split divides a sequence into the subsequences between its separators, including the
//! empty subsequences found before a leading separator, between adjacent separators and after a
//! trailing separator. Nothing is computed until a subsequence is read.
//!

mod keeping_split;
mod keeping_split_iterator;
mod omitting_split_iterator;
mod split_extensions;

pub use self::keeping_split::*;
pub use self::keeping_split_iterator::*;
pub use self::omitting_split_iterator::*;
pub use self::split_extensions::*;
