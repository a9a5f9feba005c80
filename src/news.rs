//! News View Model
//!
//! Text shown on the news route. No articles are fetched.

use crate::session::User;

/// Greeting line of the news view
pub fn greeting(user: Option<&User>) -> String {
    match user {
        Some(user) => format!("Welcome back, {}", user.name),
        None => "You are browsing as a guest".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        assert_eq!(greeting(None), "You are browsing as a guest");
        assert_eq!(greeting(Some(&User::new("User"))), "Welcome back, User");
    }
}
