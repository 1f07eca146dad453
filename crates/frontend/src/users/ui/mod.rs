mod data_display;
mod delete;
mod get;
mod post;
mod put;

pub use data_display::DataDisplay;
pub use delete::UserDelete;
pub use get::UserGet;
pub use post::UserPost;
pub use put::UserPut;
