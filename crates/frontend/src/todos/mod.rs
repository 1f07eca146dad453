//! Skeletal to-do pages backed by the local list service.

pub mod api;
pub mod model;
pub mod ui;
