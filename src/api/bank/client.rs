use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client as HttpClient, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::models::{
    BalanceResponse, ClientError, CreateAccountRequest, LoginRequest, LoginResponse,
    RegisterRequest, StatusResponse, TransferRequest,
};
use crate::models::{Account, Id, Session, Transaction, UserData};
use crate::storage::{SessionStore, TOKEN_KEY, USER_DATA_KEY};

/// Options for a single call through [`SessionClient::request`]
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// JSON body, only sent for non-GET methods
    pub data: Option<Value>,
    /// Attach the stored token, if any
    pub include_auth: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            data: None,
            include_auth: true,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(data: Value) -> Self {
        Self {
            method: Method::POST,
            data: Some(data),
            include_auth: true,
        }
    }

    pub fn without_auth(mut self) -> Self {
        self.include_auth = false;
        self
    }
}

/// Banking API client owning the authentication session.
///
/// The token is read once when a request is built and is never changed
/// while that request is in flight. Two calls issued back to back are two
/// independent requests.
pub struct SessionClient {
    http_client: HttpClient,
    base_url: String,
    session: RwLock<Session>,
    store: Arc<dyn SessionStore>,
}

impl SessionClient {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8080/api";

    /// Create a client, restoring any session already held by `store`.
    ///
    /// Stored values that cannot be read are skipped and the client starts
    /// unauthenticated; the next login or logout overwrites them.
    pub fn new(base_url: impl Into<String>, store: Arc<dyn SessionStore>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let token = match store.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!("Ignoring unreadable stored token: {}", e);
                None
            }
        };
        let user = match store.get(USER_DATA_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<UserData>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("Ignoring unreadable cached user data: {}", e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Ignoring unreadable cached user data: {}", e);
                None
            }
        };

        if token.is_some() {
            debug!("Restored stored session for {:?}", user.as_ref().map(|u| &u.username));
        }

        Self {
            http_client: HttpClient::new(),
            base_url,
            session: RwLock::new(Session { token, user }),
            store,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Store `token` in memory and in the session store
    pub async fn set_token(&self, token: &str) -> Result<(), ClientError> {
        let mut session = self.session.write().await;
        self.store.set(TOKEN_KEY, token)?;
        session.token = Some(token.to_string());
        Ok(())
    }

    /// Drop the token and cached user data from the session store and
    /// memory. Memory is only cleared once the store has been.
    pub async fn clear_token(&self) -> Result<(), ClientError> {
        let mut session = self.session.write().await;
        self.store.remove(TOKEN_KEY)?;
        self.store.remove(USER_DATA_KEY)?;
        *session = Session::default();
        Ok(())
    }

    /// End the session. Same transition as [`SessionClient::clear_token`].
    pub async fn logout(&self) -> Result<(), ClientError> {
        self.clear_token().await?;
        info!("Logged out");
        Ok(())
    }

    /// Whether a token is held. The server is not consulted.
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_authenticated()
    }

    /// Cached `{id, username}` of the logged-in user
    pub async fn user_data(&self) -> Option<UserData> {
        self.session.read().await.user.clone()
    }

    /// Build request headers; the token goes out raw, without a scheme prefix
    fn create_headers(token: Option<&str>) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = token {
            let auth_value = HeaderValue::from_str(token)
                .map_err(|e| ClientError::InvalidHeader(e.to_string()))?;
            headers.insert(AUTHORIZATION, auth_value);
        }

        Ok(headers)
    }

    /// Message for a failed response: the body's `message` field when the
    /// server sent one, otherwise a status-derived fallback
    fn error_message(status: reqwest::StatusCode, body: &Value) -> String {
        body.get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()))
    }

    /// Issue one JSON request against `base_url + endpoint`.
    ///
    /// The body is parsed as JSON, falling back to an empty object when it
    /// is not JSON at all.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ClientError> {
        let result = self.send(endpoint, options).await;
        if let Err(e) = &result {
            warn!("API request failed: {}", e);
        }
        result
    }

    async fn send(&self, endpoint: &str, options: RequestOptions) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.base_url, endpoint);

        let token = if options.include_auth {
            self.session
                .read()
                .await
                .token
                .clone()
                .filter(|t| !t.is_empty())
        } else {
            None
        };
        let headers = Self::create_headers(token.as_deref())?;

        let mut builder = self
            .http_client
            .request(options.method.clone(), &url)
            .headers(headers);

        if options.method != Method::GET {
            if let Some(data) = &options.data {
                let body = serde_json::to_vec(data).map_err(|e| ClientError::Encode(e.to_string()))?;
                builder = builder.body(body);
            }
        }

        debug!("{} {}", options.method, url);

        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Network(format!("Request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Network(format!("Failed to read response: {}", e)))?;
        let body = serde_json::from_str::<Value>(&text).unwrap_or_else(|_| Value::Object(Map::new()));

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: Self::error_message(status, &body),
            });
        }

        Ok(body)
    }

    async fn request_as<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, ClientError> {
        let body = self.request(endpoint, options).await?;
        serde_json::from_value(body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    fn to_body<T: Serialize>(data: &T) -> Result<Value, ClientError> {
        serde_json::to_value(data).map_err(|e| ClientError::Encode(e.to_string()))
    }

    /// POST /login
    ///
    /// On a successful response carrying a token, the token is adopted and
    /// `{id, username}` is cached alongside it.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        let data = Self::to_body(&LoginRequest { username, password })?;
        let response: LoginResponse = self
            .request_as("/login", RequestOptions::post(data).without_auth())
            .await?;

        if response.success {
            if let Some(token) = response.token.as_deref().filter(|t| !t.is_empty()) {
                let user = UserData {
                    id: response.user_id.clone(),
                    username: response
                        .username
                        .clone()
                        .unwrap_or_else(|| username.to_string()),
                };
                self.adopt_session(token, user).await?;
                info!("Logged in as {}", username);
            }
        }

        Ok(response)
    }

    async fn adopt_session(&self, token: &str, user: UserData) -> Result<(), ClientError> {
        let user_json =
            serde_json::to_string(&user).map_err(|e| ClientError::Encode(e.to_string()))?;

        let mut session = self.session.write().await;
        let previous_token = session.token.clone();
        self.store.set(TOKEN_KEY, token)?;

        if let Err(e) = self.store.set(USER_DATA_KEY, &user_json) {
            let rollback = match &previous_token {
                Some(previous) => self.store.set(TOKEN_KEY, previous),
                None => self.store.remove(TOKEN_KEY),
            };
            if let Err(rollback_err) = rollback {
                warn!("Failed to restore previous token: {}", rollback_err);
            }
            return Err(e.into());
        }

        session.token = Some(token.to_string());
        session.user = Some(user);
        Ok(())
    }

    /// POST /register. Does not touch the session.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<StatusResponse, ClientError> {
        let data = Self::to_body(&RegisterRequest { username, email, password })?;
        self.request_as("/register", RequestOptions::post(data).without_auth())
            .await
    }

    /// GET /accounts
    pub async fn get_accounts(&self) -> Result<Vec<Account>, ClientError> {
        self.request_as("/accounts", RequestOptions::get()).await
    }

    /// POST /accounts
    pub async fn create_account(
        &self,
        account_type: &str,
        initial_deposit: f64,
    ) -> Result<StatusResponse, ClientError> {
        let data = Self::to_body(&CreateAccountRequest { account_type, initial_deposit })?;
        self.request_as("/accounts", RequestOptions::post(data)).await
    }

    /// GET /balance/{account_id}
    pub async fn get_balance(&self, account_id: &Id) -> Result<BalanceResponse, ClientError> {
        self.request_as(&format!("/balance/{}", account_id), RequestOptions::get())
            .await
    }

    /// POST /transfer
    ///
    /// No amount or balance checks happen here; callers validate first.
    pub async fn transfer(
        &self,
        from_account: &Id,
        to_account_number: &str,
        amount: f64,
        description: Option<&str>,
    ) -> Result<StatusResponse, ClientError> {
        let data = Self::to_body(&TransferRequest {
            from_account: from_account.as_str(),
            to_account_number,
            amount,
            description: description.unwrap_or(""),
        })?;
        self.request_as("/transfer", RequestOptions::post(data)).await
    }

    /// GET /transactions/{account_id}
    pub async fn get_transactions(&self, account_id: &Id) -> Result<Vec<Transaction>, ClientError> {
        self.request_as(&format!("/transactions/{}", account_id), RequestOptions::get())
            .await
    }
}
