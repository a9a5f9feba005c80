//! Session State
//!
//! The single in-memory slot holding the signed-in user. Nothing here is
//! persisted; a page reload starts from an empty session.

/// Display name given to the placeholder user when none is configured
pub const DEFAULT_PLACEHOLDER_NAME: &str = "User";

/// A signed-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The fixed stand-in produced by the login action.
    ///
    /// No identity is verified; every call yields an equal record.
    pub fn placeholder(name: &str) -> Self {
        Self::new(name)
    }
}

/// Session owned by the router shell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Replace the current user. Always succeeds.
    pub fn sign_in(&mut self, user: User) {
        tracing::info!(user = %user.name, "User signed in");
        self.user = Some(user);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_empty() {
        let session = Session::new();
        assert!(!session.is_signed_in());
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn test_sign_in_sets_placeholder() {
        let mut session = Session::new();
        session.sign_in(User::placeholder(DEFAULT_PLACEHOLDER_NAME));

        assert!(session.is_signed_in());
        assert_eq!(session.current_user().map(|u| u.name.as_str()), Some("User"));
    }

    #[test]
    fn test_repeated_sign_in_keeps_equal_user() {
        let mut session = Session::new();
        session.sign_in(User::placeholder("User"));
        let first = session.clone();
        session.sign_in(User::placeholder("User"));

        assert_eq!(session, first);
    }
}
