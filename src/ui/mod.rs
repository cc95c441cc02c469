//! Collaborator traits for surfacing authentication outcomes to the UI.
//!
//! The embedding application passes implementations into `AuthController`
//! directly; tests substitute recording doubles.

/// Displays messages to the user (toast/banner layer).
pub trait Notifier {
    fn error(&self, message: &str);
}

/// In-app route changes within the single-page client.
pub trait Router {
    fn navigate_to(&self, path: &str);
}

/// Full browser navigation, replacing the current history entry.
pub trait Navigator {
    fn replace(&self, url: &str);
}
