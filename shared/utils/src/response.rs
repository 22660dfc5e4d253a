use serde::{Deserialize, Serialize};

/// Uniform response envelope. Every endpoint answers with
/// `{status, message, data}` on success and failure alike; `data` is
/// `null` whenever there is no payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: true,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    pub fn success_empty() -> Self {
        Self {
            status: true,
            message: "success".to_string(),
            data: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: false,
            message: message.into(),
            data: None,
        }
    }
}
