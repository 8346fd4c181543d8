use leptos::*;

pub mod repository;
pub mod utils;

mod panel;

pub use panel::CreateFranchisePanel;

#[component]
pub fn CreateFranchisePage() -> impl IntoView {
    view! { <CreateFranchisePanel /> }
}
