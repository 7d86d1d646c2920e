//! Data models exchanged with the banking API
//!
//! These shapes are owned by the server. The client passes them through
//! without validating or mutating them.

pub mod id;
pub mod account;
pub mod transaction;
pub mod session;

pub use id::Id;
pub use account::Account;
pub use transaction::Transaction;
pub use session::{Session, UserData};
