use contracts::todos::Todo;

/// What a to-do page resolved to after its initial fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Loaded(T),
    NotFound,
}

/// Fold a fetch result into a page state.
///
/// Every failure, network or non-2xx alike, collapses into `NotFound`;
/// the cause is logged and then discarded.
pub fn resolve<T>(result: Result<T, String>) -> PageState<T> {
    match result {
        Ok(value) => PageState::Loaded(value),
        Err(e) => {
            log::debug!("todo fetch failed: {}", e);
            PageState::NotFound
        }
    }
}

/// Append a to-do to the loaded list. Local state only; nothing is sent
/// to the backend. A not-yet-loaded page ignores the append.
pub fn append_todo(state: &mut PageState<Vec<Todo>>, todo: Todo) {
    if let PageState::Loaded(todos) = state {
        todos.push(todo);
    }
}

/// Replace the loaded to-do with an updated one. Local state only.
pub fn replace_todo(state: &mut PageState<Todo>, updated: Todo) {
    *state = PageState::Loaded(updated);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_resolves_to_loaded() {
        let todo = Todo {
            id: "1".to_string(),
            title: "Buy milk".to_string(),
            completed: true,
        };
        assert_eq!(resolve(Ok(todo.clone())), PageState::Loaded(todo));
    }

    #[test]
    fn append_extends_loaded_list_locally() {
        let first = Todo {
            id: "1".to_string(),
            title: "Buy milk".to_string(),
            completed: false,
        };
        let second = Todo {
            id: "2".to_string(),
            title: "Walk the dog".to_string(),
            completed: false,
        };
        let mut state = PageState::Loaded(vec![first.clone()]);
        append_todo(&mut state, second.clone());
        assert_eq!(state, PageState::Loaded(vec![first, second]));
    }

    #[test]
    fn append_on_not_found_changes_nothing() {
        let mut state = PageState::NotFound;
        append_todo(
            &mut state,
            Todo {
                id: "1".to_string(),
                title: "Buy milk".to_string(),
                completed: false,
            },
        );
        assert_eq!(state, PageState::NotFound);
    }

    #[test]
    fn replace_swaps_the_loaded_record() {
        let mut state = PageState::Loaded(Todo {
            id: "1".to_string(),
            title: "Buy milk".to_string(),
            completed: false,
        });
        let updated = Todo {
            id: "1".to_string(),
            title: "Buy milk".to_string(),
            completed: true,
        };
        replace_todo(&mut state, updated.clone());
        assert_eq!(state, PageState::Loaded(updated));
    }

    #[test]
    fn any_failure_resolves_to_not_found() {
        assert_eq!(
            resolve::<Vec<Todo>>(Err("Failed to send request: timeout".to_string())),
            PageState::NotFound
        );
        assert_eq!(
            resolve::<Vec<Todo>>(Err("HTTP 500".to_string())),
            PageState::NotFound
        );
    }
}
