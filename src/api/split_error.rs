use thiserror::{Error};

///
/// Ways that a cursor can be misused when reading from a keeping split
///
/// The unchecked operations treat these as contract violations. The `try_` operations report them
/// using this type instead.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum SplitError {
    /// The terminal cursor does not address a subsequence
    #[error("the terminal cursor does not address a subsequence")]
    TerminalCursor,

    /// Tried to move back from the first subsequence of a split
    #[error("cannot retreat before the first subsequence")]
    RetreatBeforeStart
}
