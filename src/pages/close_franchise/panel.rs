use crate::{
    api::ApiClient,
    components::layout::{ErrorMessage, Layout},
    state::selection,
    utils::browser,
};
use leptos::*;
use std::rc::Rc;

use super::repository::CloseFranchiseRepository;

#[component]
pub fn CloseFranchisePanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = CloseFranchiseRepository::new_with_client(Rc::new(api));

    let selected = selection::recall().franchise;
    let (error, set_error) = create_signal(None::<String>);

    let close_action = create_action(move |franchise_id: &i64| {
        let repo = repository.clone();
        let franchise_id = *franchise_id;
        async move { repo.close(franchise_id).await }
    });
    let pending = close_action.pending();

    create_effect(move |_| {
        if let Some(result) = close_action.value().get() {
            match result {
                Ok(_) => {
                    selection::forget();
                    browser::navigate_to("/admin-dashboard");
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let body = match selected {
        Some(franchise) => {
            let franchise_id = franchise.id;
            let prompt = format!(
                "Are you sure you want to close the {} franchise? This will close all \
                 associated stores and cannot be restored. All outstanding revenue will \
                 not be refunded.",
                franchise.name
            );
            view! {
                <h2 class="text-2xl font-bold text-fg">"Close franchise"</h2>
                <p class="mt-2 text-sm text-fg-muted">{prompt}</p>
                <Show when=move || error.get().is_some()>
                    <div class="mt-4">
                        <ErrorMessage message={error.get().unwrap_or_default()} />
                    </div>
                </Show>
                <div class="mt-6 flex gap-2">
                    <button
                        type="button"
                        class="bg-action-danger-bg text-action-danger-text rounded px-4 py-2 text-sm font-medium"
                        disabled=move || pending.get()
                        on:click=move |_| {
                            if let Some(id) = franchise_id {
                                close_action.dispatch(id);
                            }
                        }
                    >
                        {move || if pending.get() { "Closing..." } else { "Close" }}
                    </button>
                    <button
                        type="button"
                        class="rounded border border-border px-4 py-2 text-sm font-medium text-fg"
                        on:click=move |_| browser::navigate_to("/admin-dashboard")
                    >
                        "Cancel"
                    </button>
                </div>
            }
            .into_view()
        }
        None => view! {
            <h2 class="text-2xl font-bold text-fg">"Close franchise"</h2>
            <p class="mt-2 text-sm text-fg-muted">"No franchise selected."</p>
            <div class="mt-6">
                <a class="text-link underline" href="/admin-dashboard">
                    "Back to the dashboard"
                </a>
            </div>
        }
        .into_view(),
    };

    view! {
        <Layout>
            <div class="max-w-md mx-auto bg-surface-elevated shadow rounded-lg p-6">{body}</div>
        </Layout>
    }
}
