//!
//! `flo_split` provides lazy split views over ordered sequences that keep empty subsequences.
//!
//! Most split functions discard the empty subsequences that appear before a leading separator,
//! between two adjacent separators or after a trailing separator. A keeping split retains them, so
//! a sequence with `n` separators always produces `n+1` subsequences, and joining those subsequences
//! back together with their separators reconstructs the original sequence.
//!
//!  * Splits are lazy: a subsequence is found only when it is read, and is a borrowed slice of the
//!    original sequence rather than a copy
//!  * Splits are traversed with cursors: `start_cursor()`, `advance()` and (for sequences that can
//!    be read backwards) `retreat()`. A dedicated terminal cursor distinguishes 'no subsequences
//!    remain' from the empty subsequence found at the end of a sequence
//!  * Any sequence implementing `SplitBase` can be split. Slices and strings are supported directly
//!
//! ## Examples
//!
//! Splitting a string on a separator character
//!
//! ```
//! use flo_split::*;
//!
//! let split = "a..b.".split_keeping_empty_on('.');
//!
//! assert!(split.iter().collect::<Vec<_>>() == vec!["a", "", "b", ""]);
//! assert!(split.omitting_empty().collect::<Vec<_>>() == vec!["a", "b"]);
//! ```
//!
//! Walking a split with cursors
//!
//! ```
//! use flo_split::*;
//!
//! let values  = [1, 0, 2, 0];
//! let split   = split_keeping_empty(&values[..], |value: &i32| *value == 0);
//!
//! let first   = split.start_cursor();
//! let second  = split.advance(first);
//! let last    = split.advance(second);
//!
//! assert!(split.slice_at(first) == &[1]);
//! assert!(split.slice_at(second) == &[2]);
//! assert!(split.slice_at(last).is_empty());
//! assert!(split.advance(last) == split.end_sentinel());
//! assert!(split.retreat(last) == second);
//! ```

pub mod api;
pub mod base;
pub mod split;

pub use crate::api::*;
pub use crate::split::*;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    ///
    /// Initialises a tracing subscriber that writes to the test output (at DEBUG level unless `RUST_LOG` says otherwise)
    ///
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Tests share a process, so the subscriber may already be installed
        let _ = fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .with_test_writer()
            .try_init();
    }
}
