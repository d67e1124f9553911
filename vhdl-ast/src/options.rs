use serde::{Deserialize, Serialize};

/// Knobs for the text emitted by the backend. Missing fields take their default
/// value when deserialized, so a driver can load a partial configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitOptions {
    /// Number of spaces per nesting level
    pub indent_width: usize,
    /// Emit a comment naming the source module in front of each entity
    pub emit_provenance: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            emit_provenance: true,
        }
    }
}
