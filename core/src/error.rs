use thiserror::Error;

/// Shown when the service gives no usable message of its own.
pub const FALLBACK_TRANSPORT_MESSAGE: &str = "Failed to fetch customer data";

/// Every failure a lookup can end in. The `Display` text of each variant is
/// the message the dashboard puts in front of the user.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Please enter at least one customer ID")]
    Validation,

    #[error("No customers found")]
    NotFound,

    #[error("{message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProfileError {
    /// Transport failure carrying the server's message, or the generic
    /// fallback when the server supplied none.
    pub fn transport(status: Option<u16>, server_message: Option<String>) -> Self {
        let message = server_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_TRANSPORT_MESSAGE.to_string());
        ProfileError::Transport { status, message }
    }
}

pub type ProfileResult<T> = Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_prefers_server_message() {
        let err = ProfileError::transport(Some(500), Some("Database unavailable".into()));
        assert_eq!(err.to_string(), "Database unavailable");
    }

    #[test]
    fn transport_blank_message_falls_back() {
        let err = ProfileError::transport(None, Some("   ".into()));
        assert_eq!(err.to_string(), FALLBACK_TRANSPORT_MESSAGE);
        let err = ProfileError::transport(Some(502), None);
        assert_eq!(err.to_string(), FALLBACK_TRANSPORT_MESSAGE);
    }

    #[test]
    fn transport_message_is_kept_verbatim() {
        let err = ProfileError::transport(Some(400), Some("  Invalid customer ID \n".into()));
        assert_eq!(err.to_string(), "  Invalid customer ID \n");
    }
}
