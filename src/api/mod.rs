mod split_base;
mod split_cursor;
mod split_error;
#[cfg(test)] mod tests;

pub use self::split_base::*;
pub use self::split_cursor::*;
pub use self::split_error::*;
