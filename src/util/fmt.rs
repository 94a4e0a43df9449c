use std::fmt::{self, Debug, Formatter};

/// Wraps preformatted text so that it is printed as-is by [`Debug`], without the quotes a
/// [`String`] would get.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
