use crate::defs::*;

/// Builds the greeting for `name`.
///
/// An absent or empty name yields [`DEFAULT_GREETING`]. Any other name is
/// inserted as-is, whitespace and case included.
pub fn greet(name: Option<&str>) -> String {
    match name {
        None | Some("") => DEFAULT_GREETING.to_string(),
        Some(name) => format!("Hello, {}!", name),
    }
}
