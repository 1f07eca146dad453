//! API endpoint constants and URL helpers.
//!
//! Both services this app talks to live at fixed addresses: the public
//! placeholder API and the local to-do backend. Nothing is configurable.

/// Public placeholder API, collection of users.
pub const USERS_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Base URL of the to-do backend.
pub const TODOS_BASE: &str = "http://localhost:5000";

/// URL of a single user resource.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::user_url;
/// let url = user_url(1); // "https://jsonplaceholder.typicode.com/users/1"
/// ```
pub fn user_url(id: u64) -> String {
    format!("{}/{}", USERS_URL, id)
}

/// URL of a single to-do resource.
pub fn todo_url(id: &str) -> String {
    format!("{}/{}", TODOS_BASE, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_url() {
        assert_eq!(user_url(1), "https://jsonplaceholder.typicode.com/users/1");
    }

    #[test]
    fn test_todo_url() {
        assert_eq!(todo_url("42"), "http://localhost:5000/42");
    }
}
