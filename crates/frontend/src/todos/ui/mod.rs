mod details;
mod home;
mod list;

pub use details::TodoPage;
pub use home::TodoHome;
pub use list::TodosPage;
