use leptos::*;

pub mod repository;

mod panel;

pub use panel::CloseFranchisePanel;

#[component]
pub fn CloseFranchisePage() -> impl IntoView {
    view! { <CloseFranchisePanel /> }
}
