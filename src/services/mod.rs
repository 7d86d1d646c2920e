//! Page controllers
//!
//! One module per screen. Controllers take the session client by
//! reference, reject bad input before any request goes out, and hand back
//! plain data for the command layer to render.

pub mod auth_service;
pub mod balance_service;
pub mod dashboard_service;
pub mod history_service;
pub mod transfer_service;

/// Result of a form submission the server acknowledged with `{success, message?}`
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
}

impl Outcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Server said no: use its message, or `fallback` when it sent none
    pub fn failure(message: Option<String>, fallback: &str) -> Self {
        Self {
            success: false,
            message: message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| fallback.to_string()),
        }
    }
}
