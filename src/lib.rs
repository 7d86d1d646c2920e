//! Client for the banking demo API.
//!
//! [`api::bank::SessionClient`] owns the auth session and talks to the
//! server; [`services`] holds the per-screen logic built on it and
//! [`commands`] renders those screens as terminal text.

pub mod api;
pub mod commands;
pub mod config;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

#[cfg(test)]
mod test_support;
