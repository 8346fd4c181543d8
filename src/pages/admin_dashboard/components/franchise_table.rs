use crate::{
    api::{Franchise, Store},
    components::{
        layout::{LoadingSpinner, RetryableError},
        pagination::PaginationControls,
    },
    pages::admin_dashboard::list_state::{PagedList, FRANCHISE_LIST},
    utils::format::format_revenue,
};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn FranchiseTable(
    list: RwSignal<PagedList<Franchise>>,
    filter_input: RwSignal<String>,
    #[prop(into)] on_filter_submit: Callback<()>,
    #[prop(into)] on_prev: Callback<()>,
    #[prop(into)] on_next: Callback<()>,
    #[prop(into)] on_retry: Callback<()>,
    #[prop(into)] on_add_franchise: Callback<()>,
    #[prop(into)] on_close_franchise: Callback<Franchise>,
    #[prop(into)] on_close_store: Callback<(Franchise, Store)>,
) -> impl IntoView {
    let franchises = Signal::derive(move || list.get().items);
    let loading = Signal::derive(move || list.get().loading);
    let error = Signal::derive(move || list.get().error);
    let prev_disabled = Signal::derive(move || list.get().prev_disabled(&FRANCHISE_LIST));
    let next_disabled = Signal::derive(move || list.get().next_disabled());

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_filter_submit.call(());
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h3 class="text-lg font-medium text-fg">"Franchises"</h3>
                <button
                    type="button"
                    class="bg-action-primary-bg text-action-primary-text rounded px-3 py-2 text-sm font-medium"
                    on:click=move |_| on_add_franchise.call(())
                >
                    "Add Franchise"
                </button>
            </div>

            <Show when=move || error.get().is_some()>
                <RetryableError
                    message=Signal::derive(move || error.get().unwrap_or_default())
                    on_retry=on_retry
                />
            </Show>
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show when=move || !loading.get() && franchises.get().is_empty() && error.get().is_none()>
                <p class="text-sm text-fg-muted">"No franchises match the current filter."</p>
            </Show>

            <Show when=move || !franchises.get().is_empty()>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead>
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    "Franchise"
                                </th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    "Franchisee"
                                </th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider">
                                    "Revenue"
                                </th>
                                <th class="px-6 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || franchises.get()
                                key=|franchise| (franchise.id, franchise.name.clone())
                                children=move |franchise: Franchise| {
                                    let close_target = franchise.clone();
                                    let close_franchise = {
                                        let on_close_franchise = on_close_franchise;
                                        move |_| on_close_franchise.call(close_target.clone())
                                    };
                                    let store_parent = franchise.clone();
                                    view! {
                                        <>
                                            <tr class="bg-surface">
                                                <td class="px-6 py-4 whitespace-nowrap text-sm font-semibold text-fg">
                                                    {franchise.name.clone()}
                                                </td>
                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                    {franchise.admin_text()}
                                                </td>
                                                <td class="px-6 py-4"></td>
                                                <td class="px-6 py-4 text-right">
                                                    <button
                                                        type="button"
                                                        class="text-sm font-medium text-status-error-text hover:underline"
                                                        on:click=close_franchise
                                                    >
                                                        "Close"
                                                    </button>
                                                </td>
                                            </tr>
                                            <For
                                                each=move || store_parent.stores.clone()
                                                key=|store| (store.id, store.name.clone())
                                                children={
                                                    let franchise = franchise.clone();
                                                    move |store: Store| {
                                                        let close_pair = (franchise.clone(), store.clone());
                                                        let close_store = {
                                                            let on_close_store = on_close_store;
                                                            move |_| on_close_store.call(close_pair.clone())
                                                        };
                                                        view! {
                                                            <tr>
                                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-fg pl-12">
                                                                    {store.name.clone()}
                                                                </td>
                                                                <td class="px-6 py-4"></td>
                                                                <td class="px-6 py-4 whitespace-nowrap text-sm text-fg">
                                                                    {format_revenue(store.total_revenue)}
                                                                </td>
                                                                <td class="px-6 py-4 text-right">
                                                                    <button
                                                                        type="button"
                                                                        class="text-sm font-medium text-status-error-text hover:underline"
                                                                        on:click=close_store
                                                                    >
                                                                        "Close"
                                                                    </button>
                                                                </td>
                                                            </tr>
                                                        }
                                                    }
                                                }
                                            />
                                        </>
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
                        placeholder="Filter franchises"
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
