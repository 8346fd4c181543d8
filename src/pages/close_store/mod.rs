use leptos::*;

pub mod repository;

mod panel;

pub use panel::CloseStorePanel;

#[component]
pub fn CloseStorePage() -> impl IntoView {
    view! { <CloseStorePanel /> }
}
