use crate::{
    api::User,
    components::{
        layout::{LoadingSpinner, RetryableError},
        pagination::PaginationControls,
    },
    pages::admin_dashboard::list_state::{PagedList, USER_LIST},
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn UserTable(
    list: RwSignal<PagedList<User>>,
    filter_input: RwSignal<String>,
    #[prop(into)] on_filter_submit: Callback<()>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
    #[prop(into)] on_retry: Callback<()>,
    #[prop(into)] on_delete: Callback<User>,
) -> impl IntoView {
    let users = Signal::derive(move || list.get().items);
    let loading = Signal::derive(move || list.get().loading);
    let error = Signal::derive(move || list.get().error);
    let prev_disabled = Signal::derive(move || list.get().prev_disabled(&USER_LIST));
    let next_disabled = Signal::derive(move || list.get().next_disabled());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_filter_submit.call(());
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-fg">"Users"</h3>

            <Show when=move || error.get().is_some()>
                <RetryableError
                    message=Signal::derive(move || error.get().unwrap_or_default())
                    on_retry=on_retry
                />
            </Show>
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show when=move || !loading.get() && users.get().is_empty() && error.get().is_none()>
                <p class="text-sm text-fg-muted">"No users match the current filter."</p>
            </Show>

            <Show when=move || !users.get().is_empty()>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead>
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    "Name"
                                </th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    "Email"
                                </th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    "Role"
                                </th>
                                <th class="px-6 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || users.get()
                                key=|user| (user.id, user.email.clone())
                                children=move |user: User| {
                                    let missing_id = user.id.is_none();
                                    let delete_target = user.clone();
                                    let delete_user = {
                                        let on_delete = on_delete;
                                        move |_| on_delete.call(delete_target.clone())
                                    };
                                    view! {
                                        <tr>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                {user.name.clone()}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                {user.email.clone()}
                                            </td>
                                            <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                {user.role_text()}
                                            </td>
                                            <td class="px-6 py-4 text-right">
                                                <button
                                                    type="button"
                                                    class="text-sm font-medium text-status-error-text hover:underline"
                                                    disabled=missing_id
                                                    on:click=delete_user
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>

            <div class="flex items-center justify-between gap-4">
                <form class="flex gap-2" on:submit=handle_submit>
                    <input
                        type="text"
                        class="border border-border rounded px-3 py-1 text-sm"
                        placeholder="Filter users"
                        prop:value=move || filter_input.get()
                        on:input=move |ev| filter_input.set(event_target_value(&ev))
                    />
                    <button
                        type="submit"
                        class="px-3 py-1 rounded border border-border text-sm font-medium text-fg"
                    >
                        "Submit"
                    </button>
                </form>
                <PaginationControls
                    prev_disabled=prev_disabled
                    next_disabled=next_disabled
                    on_prev=on_prev
                    on_next=on_next
                />
            </div>
        </div>
    }
}
