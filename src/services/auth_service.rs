//! Login and registration screens

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::Outcome;
use crate::api::bank::{ClientError, SessionClient};

const MIN_PASSWORD_LEN: usize = 6;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles");
}

/// Registration form as typed by the user
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Fail with [`ClientError::NotAuthenticated`] unless a token is held
pub async fn require_auth(client: &SessionClient) -> Result<(), ClientError> {
    if client.is_authenticated().await {
        Ok(())
    } else {
        Err(ClientError::NotAuthenticated)
    }
}

pub async fn login(client: &SessionClient, username: &str, password: &str) -> Result<Outcome, ClientError> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ClientError::validation("Please fill in all fields"));
    }

    let response = client.login(username, password).await?;
    if response.success {
        Ok(Outcome::success("Login successful!"))
    } else {
        Ok(Outcome::failure(response.message, "Login failed"))
    }
}

/// Check the form in the order the fields are shown, first problem wins
pub fn validate_registration(form: &RegistrationForm) -> Result<(), ClientError> {
    let username = form.username.trim();
    let email = form.email.trim();

    if username.is_empty() || email.is_empty() || form.password.is_empty() || form.confirm_password.is_empty() {
        return Err(ClientError::validation("Please fill in all fields"));
    }
    if form.password != form.confirm_password {
        return Err(ClientError::validation("Passwords do not match"));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ClientError::validation(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LEN
        )));
    }
    if !is_valid_email(email) {
        return Err(ClientError::validation("Please enter a valid email address"));
    }
    Ok(())
}

pub async fn register(client: &SessionClient, form: &RegistrationForm) -> Result<Outcome, ClientError> {
    validate_registration(form)?;

    let username = form.username.trim();
    debug!("Registering {}", username);
    let response = client
        .register(username, form.email.trim(), &form.password)
        .await?;

    if response.success {
        Ok(Outcome::success("Account created successfully! You can now log in."))
    } else {
        Ok(Outcome::failure(response.message, "Registration failed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::test_support::{MockRoute, MockServer};
    use serde_json::json;
    use std::sync::Arc;

    fn form(username: &str, email: &str, password: &str, confirm: &str) -> RegistrationForm {
        RegistrationForm {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    fn validation_message(result: Result<(), ClientError>) -> String {
        match result {
            Err(ClientError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("alice@example.com"));
        assert!(!is_valid_email("alice@example"));
        assert!(!is_valid_email("alice example@x.io"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn test_registration_rules_in_order() {
        assert_eq!(
            validation_message(validate_registration(&form("  ", "a@b.co", "secret1", "secret1"))),
            "Please fill in all fields"
        );
        assert_eq!(
            validation_message(validate_registration(&form("alice", "bad", "secret1", "secret2"))),
            "Passwords do not match"
        );
        assert_eq!(
            validation_message(validate_registration(&form("alice", "bad", "abc", "abc"))),
            "Password must be at least 6 characters long"
        );
        assert_eq!(
            validation_message(validate_registration(&form("alice", "bad", "secret1", "secret1"))),
            "Please enter a valid email address"
        );
        assert!(validate_registration(&form(" alice ", " a@b.co ", "secret1", "secret1")).is_ok());
    }

    #[tokio::test]
    async fn test_login_with_empty_fields_sends_nothing() {
        let server = MockServer::start(vec![]).await;
        let client = SessionClient::new(server.base_url(), Arc::new(MemoryStore::new()));

        let err = login(&client, "   ", "secret").await.unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields");
        assert!(server.requests().is_empty());
    }

    #[tokio::test]
    async fn test_login_trims_username() {
        let server = MockServer::start(vec![MockRoute::json(
            "POST",
            "/api/login",
            200,
            json!({"success": true, "token": "T1", "user_id": "u1", "username": "alice"}),
        )])
        .await;
        let client = SessionClient::new(server.base_url(), Arc::new(MemoryStore::new()));

        let outcome = login(&client, "  alice ", "secret").await.unwrap();
        assert!(outcome.success);
        assert!(require_auth(&client).await.is_ok());

        let body: serde_json::Value = serde_json::from_str(&server.requests()[0].body).unwrap();
        assert_eq!(body["username"], "alice");
    }

    #[tokio::test]
    async fn test_register_failure_message() {
        let server = MockServer::start(vec![MockRoute::json(
            "POST",
            "/api/register",
            200,
            json!({"success": false}),
        )])
        .await;
        let client = SessionClient::new(server.base_url(), Arc::new(MemoryStore::new()));

        let outcome = register(&client, &form("alice", "a@b.co", "secret1", "secret1"))
            .await
            .unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Registration failed");
        assert!(matches!(require_auth(&client).await, Err(ClientError::NotAuthenticated)));
    }
}
