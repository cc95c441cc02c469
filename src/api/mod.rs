//! HTTP client module for the Bridge authentication endpoints.
//!
//! This module provides the `ApiClient` for talking to the Bridge server
//! and the `AuthApi` trait the orchestration layer depends on. Sign-in
//! responses are classified into a tagged `SignInOutcome` so status-code
//! knowledge stays inside the transport.

pub mod client;
pub mod error;

pub use client::{ApiClient, AuthApi, SignInOutcome};
pub use error::ApiError;
