//! The four verb components working against the placeholder users API.

pub mod api;
pub mod model;
pub mod ui;
