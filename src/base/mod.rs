//!
//! # Base sequences
//!
//! Implementations of the split base traits for the standard library's sequence types. `Vec<T>` and
//! `String` can be split through these implementations via deref.
//!

mod slice_base;
mod str_base;
#[cfg(test)] mod tests;
