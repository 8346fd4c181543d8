use crate::{
    api::ApiClient,
    components::layout::{ErrorMessage, Layout},
    state::selection,
    utils::browser,
};
use leptos::*;
use std::rc::Rc;

use super::repository::CloseStoreRepository;

#[component]
pub fn CloseStorePanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = CloseStoreRepository::new_with_client(Rc::new(api));

    let selected = selection::recall();
    let (error, set_error) = create_signal(None::<String>);

    let close_action = create_action(move |ids: &(i64, i64)| {
        let repo = repository.clone();
        let (franchise_id, store_id) = *ids;
        async move { repo.close(franchise_id, store_id).await }
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

    let body = match (selected.franchise, selected.store) {
        (Some(franchise), Some(store)) => {
            let ids = franchise.id.zip(store.id);
            let prompt = format!(
                "Are you sure you want to close the {} store {}? This cannot be \
                 restored. All outstanding revenue will not be refunded.",
                franchise.name, store.name
            );
            view! {
                <h2 class="text-2xl font-bold text-fg">"Close store"</h2>
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
                            if let Some((franchise_id, store_id)) = ids {
                                close_action.dispatch((franchise_id, store_id));
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
        _ => view! {
            <h2 class="text-2xl font-bold text-fg">"Close store"</h2>
            <p class="mt-2 text-sm text-fg-muted">"No store selected."</p>
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        state::selection::{self, DashboardSelection},
        test_support::{helpers, ssr::render_to_string},
    };

    #[test]
    fn confirmation_names_the_selected_store() {
        let html = render_to_string(move || {
            selection::provide_selection();
            selection::remember(DashboardSelection::store(
                helpers::lota_pizza(),
                helpers::lehi_store(),
            ));
            view! { <CloseStorePanel /> }
        });
        assert!(html.contains("close the LotaPizza store Lehi"));
        assert!(html.contains("This cannot be restored."));
    }

    #[test]
    fn missing_selection_offers_a_way_back() {
        let html = render_to_string(move || {
            selection::provide_selection();
            view! { <CloseStorePanel /> }
        });
        assert!(html.contains("No store selected."));
        assert!(html.contains("Back to the dashboard"));
    }
}
