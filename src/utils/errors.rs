use crate::api::bank::ClientError;

/// Turn a client error into the one-line message shown in place of the
/// command output
pub fn user_message(error: &ClientError) -> String {
    match error {
        ClientError::Network(_) => {
            "⚠️ Network Error: could not reach the bank server. Please try again.".to_string()
        }
        other => format!("❌ {}", other),
    }
}
