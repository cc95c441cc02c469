//! Client library for the Bridge research-study web application.
//!
//! The browser front end drives authentication through a thin orchestration
//! layer: a UI event reaches [`AuthController`], which issues the request
//! through the [`AuthApi`] transport and reconciles the classified outcome
//! into the shared [`Session`] and the UI collaborators ([`Notifier`],
//! [`Router`], [`Navigator`]).
//!
//! Basic wiring:
//!
//! ```no_run
//! use bridge_client::{ApiClient, AuthController, Config, Credentials};
//! # use bridge_client::{Navigator, Notifier, Router};
//! # struct Ui;
//! # impl Notifier for Ui { fn error(&self, _: &str) {} }
//! # impl Router for Ui { fn navigate_to(&self, _: &str) {} }
//! # impl Navigator for Ui { fn replace(&self, _: &str) {} }
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let api = ApiClient::new(config.base_url)?;
//! let mut controller = AuthController::new(api, Ui, Ui, Ui);
//!
//! let mut credentials = Credentials::new("test2", "password");
//! controller.sign_in(&mut credentials).await;
//! // credentials.password is empty now, whatever happened
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod ui;

pub use api::{ApiClient, ApiError, AuthApi, SignInOutcome};
pub use auth::{AuthController, Credentials, Session, SessionInfo};
pub use config::Config;
pub use ui::{Navigator, Notifier, Router};
