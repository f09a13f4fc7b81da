use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Error payload shared by every JSON endpoint: `{"error": "..."}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

/// Plain status acknowledgement, e.g. `{"status": "Recipe deleted"}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusBody {
    pub status: String,
}

impl StatusBody {
    pub fn new(status: impl Into<String>) -> Self {
        Self { status: status.into() }
    }
}
