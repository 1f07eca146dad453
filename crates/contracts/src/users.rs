use serde::{Deserialize, Serialize};

/// Form state shared across the verb components.
///
/// Serialized in camelCase because that is what the placeholder API
/// echoes back: `{"firstName": "...", "lastName": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub first_name: String,
    pub last_name: String,
}

/// One record of the `/users` collection.
///
/// JSONPlaceholder returns many more fields (username, email, address,
/// company); only what the list actually renders is typed, the rest is
/// ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
}

/// Last successful response payload, kept opaque.
///
/// The API echoes whatever was sent plus an `id`; no schema is assumed and
/// nothing is validated. Replaced wholesale on every response, cleared
/// explicitly after a delete.
pub type ResponseRecord = serde_json::Map<String, serde_json::Value>;
