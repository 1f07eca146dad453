//! Shared data contracts between the frontend and the remote services.

pub mod todos;
pub mod users;
