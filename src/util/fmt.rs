use std::fmt::{self, Debug, Formatter};

/// Writes the contained string verbatim when debug formatted, for custom entries in
/// `debug_list` and friends.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
