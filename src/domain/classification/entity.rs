use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// A classification outcome as it travels over the wire.
///
/// The remote classifier reports its prediction under the field name `class`;
/// that name is part of the wire contract and is kept verbatim rather than
/// normalized to something like `label`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub class: String,

    /// Confidence percentage, within [0, 100]
    pub confidence: f64,

    /// Present only when the result came from the mock fallback path,
    /// explaining why the substitution happened
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Classification {
    /// Attach a fallback note to a mock-sourced classification.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// One user-initiated classification request. Exactly one variant is active;
/// a request never carries both an uploaded file and an image URL.
#[derive(Debug, Clone)]
pub enum ClassificationRequest {
    File { bytes: Bytes, filename: String },
    Url { url: String },
}
