use super::render_outcome;
use crate::api::bank::{ClientError, SessionClient};
use crate::services::auth_service::{self, RegistrationForm};

pub async fn login(client: &SessionClient, args: &[&str]) -> Result<String, ClientError> {
    if client.is_authenticated().await {
        let name = client
            .user_data()
            .await
            .map(|u| u.username)
            .unwrap_or_else(|| "an existing session".to_string());
        return Ok(format!("Already logged in as {}. Use `logout` first.", name));
    }

    if args.len() < 2 {
        return Ok("Usage: `login <username> <password>`".to_string());
    }

    let outcome = auth_service::login(client, args[0], args[1]).await?;
    Ok(render_outcome(&outcome, "✅"))
}

pub async fn register(client: &SessionClient, args: &[&str]) -> Result<String, ClientError> {
    if args.len() < 4 {
        return Ok(
            "Usage: `register <username> <email> <password> <confirm password>`\n\
             Passwords must be at least 6 characters long."
                .to_string(),
        );
    }

    let form = RegistrationForm {
        username: args[0].to_string(),
        email: args[1].to_string(),
        password: args[2].to_string(),
        confirm_password: args[3].to_string(),
    };
    let outcome = auth_service::register(client, &form).await?;
    Ok(render_outcome(&outcome, "✅"))
}

pub async fn logout(client: &SessionClient) -> Result<String, ClientError> {
    client.logout().await?;
    Ok("👋 Logged out".to_string())
}

pub async fn whoami(client: &SessionClient) -> Result<String, ClientError> {
    auth_service::require_auth(client).await?;
    Ok(match client.user_data().await {
        Some(user) => match user.id {
            Some(id) => format!("Logged in as {} (user {})", user.username, id),
            None => format!("Logged in as {}", user.username),
        },
        None => "Logged in".to_string(),
    })
}
