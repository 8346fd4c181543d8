pub mod components;
pub mod layout;
pub mod list_state;
pub mod repository;
pub mod view_model;

mod panel;

pub use panel::AdminDashboardPage;
