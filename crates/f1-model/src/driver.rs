use serde::{Deserialize, Serialize};

/// A driver as referenced from a result or a race winner.
///
/// `code` is derived during normalization and is not authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DriverRef {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub team: String,
}

impl DriverRef {
    pub fn new(code: impl Into<String>, name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            team: team.into(),
        }
    }

    /// Code when present, otherwise the name.
    pub fn label(&self) -> &str {
        if self.code.is_empty() {
            &self.name
        } else {
            &self.code
        }
    }
}
