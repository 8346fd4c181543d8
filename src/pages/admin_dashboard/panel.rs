use crate::{
    api::{Franchise, Store, User},
    components::{layout::Layout, not_found::NotFound},
};
use leptos::*;

use super::{
    components::{FranchiseTable, UserTable},
    layout::DashboardFrame,
    view_model::use_admin_dashboard_view_model,
};

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let vm = use_admin_dashboard_view_model();
    let is_admin = vm.is_admin;
    let franchises = vm.franchises;
    let users = vm.users;
    let franchise_filter = vm.franchise_filter;
    let user_filter = vm.user_filter;

    let on_franchise_filter = Callback::new({
        let vm = vm.clone();
        move |_| vm.submit_franchise_filter()
    });
    let on_franchise_prev = Callback::new({
        let vm = vm.clone();
        move |_| vm.prev_franchise_page()
    });
    let on_franchise_next = Callback::new({
        let vm = vm.clone();
        move |_| vm.next_franchise_page()
    });
    let on_franchise_retry = Callback::new({
        let vm = vm.clone();
        move |_| vm.retry_franchises()
    });
    let on_add_franchise = Callback::new({
        let vm = vm.clone();
        move |_| vm.open_create_franchise()
    });
    let on_close_franchise = Callback::new({
        let vm = vm.clone();
        move |franchise: Franchise| vm.open_close_franchise(franchise)
    });
    let on_close_store = Callback::new({
        let vm = vm.clone();
        move |(franchise, store): (Franchise, Store)| vm.open_close_store(franchise, store)
    });

    let on_user_filter = Callback::new({
        let vm = vm.clone();
        move |_| vm.submit_user_filter()
    });
    let on_user_prev = Callback::new({
        let vm = vm.clone();
        move |_| vm.prev_user_page()
    });
    let on_user_next = Callback::new({
        let vm = vm.clone();
        move |_| vm.next_user_page()
    });
    let on_user_retry = Callback::new({
        let vm = vm.clone();
        move |_| vm.retry_users()
    });
    let on_delete_user = Callback::new({
        let vm = vm.clone();
        move |user: User| vm.delete_user(&user)
    });

    view! {
        <Layout>
            <Show
                when=move || is_admin.get()
                fallback=move || view! { <NotFound /> }.into_view()
            >
                <DashboardFrame>
                    <FranchiseTable
                        list=franchises
                        filter_input=franchise_filter
                        on_filter_submit=on_franchise_filter
                        on_prev=on_franchise_prev
                        on_next=on_franchise_next
                        on_retry=on_franchise_retry
                        on_add_franchise=on_add_franchise
                        on_close_franchise=on_close_franchise
                        on_close_store=on_close_store
                    />
                    <UserTable
                        list=users
                        filter_input=user_filter
                        on_filter_submit=on_user_filter
                        on_prev=on_user_prev
                        on_next=on_user_next
                        on_retry=on_user_retry
                        on_delete=on_delete_user
                    />
                </DashboardFrame>
            </Show>
        </Layout>
    }
}
