//! Authentication module: session state and sign-in orchestration.
//!
//! This module provides:
//! - `Session`: the login-state triple shared with the rest of the client
//! - `Credentials`: transient sign-in form data
//! - `AuthController`: reconciles sign-in/sign-out outcomes into state
//!   and the UI collaborators

pub mod controller;
pub mod credentials;
pub mod session;

pub use controller::AuthController;
pub use credentials::Credentials;
pub use session::{Session, SessionInfo};
