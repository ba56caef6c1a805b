use crate::records::LocalizedText;
use serde::{Deserialize, Serialize};

/// A PLR theme (e.g. land use plans, contaminated sites).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Stable theme code
    pub code: String,
    /// Theme description
    pub text: LocalizedText,
}

impl Theme {
    pub fn new(code: impl Into<String>, text: impl Into<LocalizedText>) -> Self {
        Self {
            code: code.into(),
            text: text.into(),
        }
    }
}
