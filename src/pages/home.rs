use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Layout>
            <div class="bg-surface-elevated shadow rounded-lg p-6 text-center">
                <h2 class="text-3xl font-bold text-fg">"The web's best pizza"</h2>
                <p class="mt-2 text-sm text-fg-muted">
                    "Pizza is not just food. It's a lifestyle, and JWT Pizza delivers it fresh."
                </p>
            </div>
        </Layout>
    }
}
