/// Credentials captured from the sign-in form.
///
/// Transient by design: the password is wiped as soon as a sign-in attempt
/// completes, whatever the outcome, so it never lingers in UI state.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Wipe the password, keeping the username for the form
    pub fn clear_password(&mut self) {
        self.password.clear();
    }
}
