use serde::{Deserialize, Serialize};

/// A single checklist item, backed by one line in a day file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Stable hex identifier embedded in the line's trailing id token.
    /// Assigned on first parse, immutable afterwards.
    pub id: String,
    /// Display text with all metadata tokens and the id token stripped.
    pub text: String,
    /// Checkbox state: `x`/`X` is done, space is open.
    pub done: bool,
    /// Estimated minutes. `None` means "not set", not zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub est_min: Option<u32>,
    /// Actual minutes spent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub act_min: Option<u32>,
    /// Free-text reason, required at the edit boundary when actual exceeds
    /// the estimate. Empty means "none".
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub reason: String,
    /// Position in the file at the most recent parse. A lookup aid only,
    /// recomputed on every load; never used as identity.
    #[serde(skip)]
    pub line_index: usize,
}

impl Task {
    /// Create a fresh open task with no metadata.
    pub fn new(id: String, text: String) -> Self {
        Task {
            id,
            text,
            done: false,
            est_min: None,
            act_min: None,
            reason: String::new(),
            line_index: 0,
        }
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.text == other.text
            && self.done == other.done
            && self.est_min == other.est_min
            && self.act_min == other.act_min
            && self.reason == other.reason
    }
}

impl Eq for Task {}
