pub mod admin_dashboard;
pub mod close_franchise;
pub mod close_store;
pub mod create_franchise;
pub mod home;
pub mod login;

pub use admin_dashboard::AdminDashboardPage;
pub use close_franchise::CloseFranchisePage;
pub use close_store::CloseStorePage;
pub use create_franchise::CreateFranchisePage;
pub use home::HomePage;
pub use login::LoginPage;
