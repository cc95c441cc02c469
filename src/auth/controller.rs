//! Sign-in/sign-out orchestration.
//!
//! `AuthController` bridges UI intents to the auth endpoint and reconciles
//! each outcome into the session and the UI collaborators. Every failure is
//! absorbed here; nothing propagates to the caller.

use tracing::{debug, warn};

use crate::api::{AuthApi, SignInOutcome};
use crate::ui::{Navigator, Notifier, Router};

use super::{Credentials, Session};

/// Route prefix of the consent flow; the sign-in session token is appended
const CONSENT_PATH_PREFIX: &str = "/consent/";

/// URL loaded after a completed sign-out
const SIGN_OUT_DESTINATION: &str = "/";

pub struct AuthController<A, N, R, W>
where
    A: AuthApi,
    N: Notifier,
    R: Router,
    W: Navigator,
{
    api: A,
    session: Session,
    notifier: N,
    router: R,
    navigator: W,
}

impl<A, N, R, W> AuthController<A, N, R, W>
where
    A: AuthApi,
    N: Notifier,
    R: Router,
    W: Navigator,
{
    pub fn new(api: A, notifier: N, router: R, navigator: W) -> Self {
        Self {
            api,
            session: Session::new(),
            notifier,
            router,
            navigator,
        }
    }

    /// Current login state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Attempt to sign in with the supplied credentials.
    ///
    /// The password is cleared before this returns, on every path. A failed
    /// attempt always lands in the logged-out state.
    pub async fn sign_in(&mut self, credentials: &mut Credentials) {
        let result = self
            .api
            .sign_in(&credentials.username, &credentials.password)
            .await;
        credentials.clear_password();

        match result {
            Ok(SignInOutcome::Success(info)) => {
                debug!(username = %info.username, "Sign in succeeded");
                self.api.set_session_token(Some(info.session_token.clone()));
                self.session.establish(info);
            }
            Ok(SignInOutcome::InvalidCredentials(message)) => {
                self.session.reset();
                if let Some(message) = message {
                    self.notifier.error(&message);
                }
            }
            Ok(SignInOutcome::ConsentRequired(token)) => {
                self.session.reset();
                self.router
                    .navigate_to(&format!("{}{}", CONSENT_PATH_PREFIX, token));
            }
            Ok(SignInOutcome::Failed) => {
                self.session.reset();
            }
            Err(err) => {
                warn!(error = %err, "Sign in request failed");
                self.session.reset();
            }
        }
    }

    /// Sign out of the current session and reload the site root.
    ///
    /// A failed request keeps the session (the server still considers the
    /// user signed in) and performs no navigation.
    pub async fn sign_out(&mut self) {
        let result = self.api.sign_out().await;
        // Drop the request token whether or not the server acknowledged
        self.api.set_session_token(None);

        match result {
            Ok(()) => {
                self.session.reset();
                self.navigator.replace(SIGN_OUT_DESTINATION);
            }
            Err(err) => {
                warn!(error = %err, "Sign out request failed");
            }
        }
    }
}
