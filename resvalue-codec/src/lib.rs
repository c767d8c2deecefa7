//! Escaping and unescaping of string values in Android-style value resource
//! files (`res/values/strings.xml`).
//!
//! The resource form of a value uses backslash escapes (`\n`, `\t`, `\'`,
//! `\"`, `\\`, `\@`, `\?`), the XML references `&lt;` and `&amp;`, and
//! double quotes to protect whitespace at the edges, which is otherwise
//! trimmed.

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod consts;
pub mod detect;
pub mod error;
pub mod escape;
pub mod unescape;
pub mod whitespace;

mod sink;

pub use detect::{is_escaped, try_is_escaped};
pub use error::{IndexError, IndexErrorKind};
pub use escape::{escape, escape_into, escaped_len, needs_escape};
pub use unescape::{
    UnescapeOptions, needs_unescape, unescape, unescape_into, unescape_with, unescaped_len,
};
pub use whitespace::is_resource_whitespace;
