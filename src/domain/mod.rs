pub mod datetime;
pub mod discount;
pub mod errors;
pub mod money;
pub mod ports;
pub mod scenic;
pub mod ticket;
pub mod validator;

/// Longest name or title the `VARCHAR(255)` columns hold, in characters.
pub const MAX_NAME_CHARS: usize = 255;

pub(crate) fn too_long(s: &str) -> bool {
    s.chars().count() > MAX_NAME_CHARS
}
