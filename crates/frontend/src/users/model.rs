use contracts::users::{ResponseRecord, User, UserInput};

/// One rendered line per user record: the `name` field only.
pub fn user_names(users: &[User]) -> Vec<String> {
    users.iter().map(|u| u.name.clone()).collect()
}

/// Fold a collection fetch into the rendered rows.
///
/// A successful read replaces the rows wholesale; a failed read logs the
/// error and keeps the prior rows untouched. No retry, nothing shown to
/// the user.
pub fn fold_fetch(current: Vec<String>, result: Result<Vec<User>, String>) -> Vec<String> {
    match result {
        Ok(users) => user_names(&users),
        Err(e) => {
            log::error!("fetch users failed: {}", e);
            current
        }
    }
}

/// Flatten a response record into displayable key/value pairs.
///
/// String values render bare; everything else keeps its JSON form.
/// Order follows the record's key order (alphabetical for JSON maps).
pub fn display_pairs(record: &ResponseRecord) -> Vec<(String, String)> {
    record
        .iter()
        .map(|(key, value)| {
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (key.clone(), text)
        })
        .collect()
}

/// Pull the form fields back out of a response record.
///
/// Missing or non-string fields come back empty; the record carries no
/// schema guarantee.
pub fn input_from_record(record: &ResponseRecord) -> UserInput {
    let field = |name: &str| {
        record
            .get(name)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    };
    UserInput {
        first_name: field("firstName"),
        last_name: field("lastName"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_renders_no_rows() {
        assert!(user_names(&[]).is_empty());
    }

    #[test]
    fn one_row_per_record() {
        let users = vec![
            User {
                id: 1,
                name: "Leanne Graham".to_string(),
            },
            User {
                id: 2,
                name: "Ervin Howell".to_string(),
            },
        ];
        let names = user_names(&users);
        assert_eq!(names.len(), users.len());
        assert_eq!(names, vec!["Leanne Graham", "Ervin Howell"]);
    }

    #[test]
    fn failed_fetch_keeps_prior_rows() {
        let prior = vec!["Leanne Graham".to_string(), "Ervin Howell".to_string()];
        let rows = fold_fetch(prior.clone(), Err("HTTP 500".to_string()));
        assert_eq!(rows, prior);
    }

    #[test]
    fn successful_fetch_replaces_rows_wholesale() {
        let prior = vec!["Leanne Graham".to_string()];
        let rows = fold_fetch(
            prior,
            Ok(vec![User {
                id: 2,
                name: "Ervin Howell".to_string(),
            }]),
        );
        assert_eq!(rows, vec!["Ervin Howell"]);
    }

    #[test]
    fn created_record_displays_its_fields() {
        // Submitting {firstName: "Ada", lastName: "Lovelace"} echoes back
        // the record with an id; the display shows exactly that record.
        let record: ResponseRecord =
            serde_json::from_str(r#"{"id":11,"firstName":"Ada","lastName":"Lovelace"}"#).unwrap();
        let pairs = display_pairs(&record);
        assert_eq!(
            pairs,
            vec![
                ("firstName".to_string(), "Ada".to_string()),
                ("id".to_string(), "11".to_string()),
                ("lastName".to_string(), "Lovelace".to_string()),
            ]
        );
    }

    #[test]
    fn record_fields_map_back_to_input() {
        let record: ResponseRecord =
            serde_json::from_str(r#"{"id":11,"firstName":"Ada","lastName":"Lovelace"}"#).unwrap();
        let input = input_from_record(&record);
        assert_eq!(input.first_name, "Ada");
        assert_eq!(input.last_name, "Lovelace");
    }

    #[test]
    fn record_without_form_fields_maps_to_empty_input() {
        let record: ResponseRecord = serde_json::from_str(r#"{"id":1}"#).unwrap();
        assert_eq!(input_from_record(&record), UserInput::default());
    }
}
