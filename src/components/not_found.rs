use leptos::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 text-center">
            <h2 class="text-2xl font-bold text-fg">"Oops"</h2>
            <p class="mt-2 text-sm text-fg-muted">
                "It looks like we have dropped a pizza on the floor. Please try another page."
            </p>
            <a href="/" class="mt-4 inline-block text-sm font-medium text-action-primary-bg hover:underline">
                "Back home"
            </a>
        </div>
    }
}
