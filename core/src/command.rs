use serde::{Deserialize, Serialize};

/// Commands a UI host sends to the session, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum SessionCommand {
    /// Raw comma-separated identifier input, exactly as typed.
    Search { customer_ids: String },
    Select { customer_id: String },
    GetState,
    Quit,
}
