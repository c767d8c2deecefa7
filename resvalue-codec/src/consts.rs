/// Escape marker.
pub const BACKSLASH: u8 = b'\\';

/// Quote delimiter protecting whitespace at the edges of a value.
pub const QUOTE: u8 = b'"';

/// XML character reference for `<`.
pub const ENTITY_LT: &str = "&lt;";

/// XML character reference for `&`.
pub const ENTITY_AMP: &str = "&amp;";

