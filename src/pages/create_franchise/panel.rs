use crate::{
    api::{ApiClient, CreateFranchiseRequest},
    components::layout::{ErrorMessage, Layout},
    utils::browser,
};
use leptos::{ev::SubmitEvent, *};
use std::rc::Rc;

use super::{repository::CreateFranchiseRepository, utils::CreateFranchiseFormState};

#[component]
pub fn CreateFranchisePanel() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = CreateFranchiseRepository::new_with_client(Rc::new(api));

    let form = create_rw_signal(CreateFranchiseFormState::default());
    let (error, set_error) = create_signal(None::<String>);

    let create_action = create_action(move |payload: &CreateFranchiseRequest| {
        let repo = repository.clone();
        let payload = payload.clone();
        async move { repo.create(payload).await }
    });
    let pending = create_action.pending();

    {
        create_effect(move |_| {
            if let Some(result) = create_action.value().get() {
                match result {
                    Ok(_) => browser::navigate_to("/admin-dashboard"),
                    Err(err) => set_error.set(Some(err.to_string())),
                }
            }
        });
    }

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let state = form.get_untracked();
        if !state.is_valid() {
            set_error.set(Some("Franchise name and admin email are required".into()));
            return;
        }
        set_error.set(None);
        create_action.dispatch(state.to_request());
    };

    view! {
        <Layout>
            <div class="max-w-md mx-auto bg-surface-elevated shadow rounded-lg p-6">
                <h2 class="text-2xl font-bold text-fg">"Create franchise"</h2>
                <p class="mt-1 text-sm text-fg-muted">"Want to create franchise?"</p>
                <Show when=move || error.get().is_some()>
                    <div class="mt-4">
                        <ErrorMessage message={error.get().unwrap_or_default()} />
                    </div>
                </Show>
                <form class="mt-4 space-y-4" on:submit=handle_submit>
                    <input
                        type="text"
                        class="w-full border border-border rounded px-3 py-2 text-sm"
                        placeholder="Franchise name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|state| state.name = event_target_value(&ev))
                    />
                    <input
                        type="email"
                        class="w-full border border-border rounded px-3 py-2 text-sm"
                        placeholder="Franchisee admin email"
                        prop:value=move || form.get().admin_email
                        on:input=move |ev| {
                            form.update(|state| state.admin_email = event_target_value(&ev))
                        }
                    />
                    <div class="flex gap-2">
                        <button
                            type="submit"
                            class="bg-action-primary-bg text-action-primary-text rounded px-4 py-2 text-sm font-medium"
                            disabled=move || pending.get()
                        >
                            {move || if pending.get() { "Creating..." } else { "Create" }}
                        </button>
                        <button
                            type="button"
                            class="rounded border border-border px-4 py-2 text-sm font-medium text-fg"
                            on:click=move |_| browser::navigate_to("/admin-dashboard")
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </Layout>
    }
}
