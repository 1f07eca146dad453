use serde::{Deserialize, Serialize};

/// A to-do item as served by the list backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_deserializes() {
        let json = r#"{"id":"42","title":"Write the report","completed":false}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, "42");
        assert_eq!(todo.title, "Write the report");
        assert!(!todo.completed);
    }
}
