pub mod client;
pub mod models;

pub use client::{RequestOptions, SessionClient};
pub use models::{BalanceResponse, ClientError, LoginResponse, StatusResponse};
