/// Name of the key line this tool manages.
pub const KEY_NAME: &str = "FLOWISE_API_KEY";

/// Shortest key accepted by `validate`.
pub const MIN_KEY_LENGTH: usize = 20;

/// Comment written above the key line when it has to be appended.
pub const APPENDED_COMMENT: &str = "# Flowise API Key (added by flowise-key)";

/// A key that passed validation (trimmed, long enough).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidKey {
    value: String,
    unusual_chars: bool,
}

impl ValidKey {
    pub(crate) fn new(value: String, unusual_chars: bool) -> Self {
        Self { value, unusual_chars }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// True when the key has characters outside `[A-Za-z0-9-_]`.
    pub fn has_unusual_chars(&self) -> bool {
        self.unusual_chars
    }

    /// Full `FLOWISE_API_KEY=<value>` line, without line ending.
    pub fn key_line(&self) -> String {
        format!("{KEY_NAME}={}", self.value)
    }
}

/// What `apply` did to the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The first key line was rewritten; later duplicates were dropped.
    Replaced { duplicates_removed: usize },
    /// No key line existed, one was added at the end.
    Appended,
}
