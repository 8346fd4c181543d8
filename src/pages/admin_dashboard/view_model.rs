use super::{
    list_state::{reduce, FetchSpec, ListAction, ListConfig, PagedList, FRANCHISE_LIST, USER_LIST},
    repository::AdminDashboardRepository,
};
use crate::{
    api::{ApiClient, Franchise, NameFilter, Role, Store, User},
    state::{auth::use_auth, selection},
    utils::browser,
};
use leptos::*;
use std::future::Future;
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminDashboardViewModel {
    pub is_admin: Memo<bool>,
    pub franchises: RwSignal<PagedList<Franchise>>,
    pub users: RwSignal<PagedList<User>>,
    pub franchise_filter: RwSignal<String>,
    pub user_filter: RwSignal<String>,
    repository: AdminDashboardRepository,
}

pub fn use_admin_dashboard_view_model() -> AdminDashboardViewModel {
    let (auth, _set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AdminDashboardRepository::new_with_client(Rc::new(api));

    let is_admin = create_memo(move |_| {
        auth.get()
            .user
            .as_ref()
            .map(|user| user.has_role(Role::Admin))
            .unwrap_or(false)
    });

    let vm = AdminDashboardViewModel {
        is_admin,
        franchises: create_rw_signal(PagedList::new(&FRANCHISE_LIST)),
        users: create_rw_signal(PagedList::new(&USER_LIST)),
        franchise_filter: create_rw_signal(String::new()),
        user_filter: create_rw_signal(String::new()),
        repository,
    };

    {
        let vm = vm.clone();
        create_effect(move |_| vm.activate_if_admin());
    }

    vm
}

impl AdminDashboardViewModel {
    /// Both tables wake up only for admins; everyone else gets zero fetches.
    pub fn activate_if_admin(&self) {
        if self.is_admin.get() {
            self.dispatch_franchises(ListAction::Activated);
            self.dispatch_users(ListAction::Activated);
        }
    }

    pub fn dispatch_franchises(&self, action: ListAction<Franchise>) {
        let repo = self.repository.clone();
        dispatch(self.franchises, action, &FRANCHISE_LIST, move |spec| async move {
            load_franchises(&repo, spec).await
        });
    }

    pub fn dispatch_users(&self, action: ListAction<User>) {
        let repo = self.repository.clone();
        dispatch(self.users, action, &USER_LIST, move |spec| async move {
            load_users(&repo, spec).await
        });
    }

    pub fn submit_franchise_filter(&self) {
        let filter = NameFilter::contains(&self.franchise_filter.get_untracked());
        self.dispatch_franchises(ListAction::FilterSubmitted(filter));
    }

    pub fn submit_user_filter(&self) {
        let filter = NameFilter::contains(&self.user_filter.get_untracked());
        self.dispatch_users(ListAction::FilterSubmitted(filter));
    }

    // Paging the franchise table drops whatever filter was active; paging
    // the user table keeps the current box contents.
    pub fn prev_franchise_page(&self) {
        let page = self.franchises.get_untracked().page.saturating_sub(1);
        self.dispatch_franchises(ListAction::PageChanged {
            page,
            filter: NameFilter::any(),
        });
    }

    pub fn next_franchise_page(&self) {
        let page = self.franchises.get_untracked().page.saturating_add(1);
        self.dispatch_franchises(ListAction::PageChanged {
            page,
            filter: NameFilter::any(),
        });
    }

    pub fn prev_user_page(&self) {
        let page = self.users.get_untracked().page.saturating_sub(1);
        let filter = NameFilter::contains(&self.user_filter.get_untracked());
        self.dispatch_users(ListAction::PageChanged { page, filter });
    }

    pub fn next_user_page(&self) {
        let page = self.users.get_untracked().page.saturating_add(1);
        let filter = NameFilter::contains(&self.user_filter.get_untracked());
        self.dispatch_users(ListAction::PageChanged { page, filter });
    }

    pub fn retry_franchises(&self) {
        self.dispatch_franchises(ListAction::Retry);
    }

    pub fn retry_users(&self) {
        self.dispatch_users(ListAction::Retry);
    }

    /// Deletes a user, then reloads the current user page with the current
    /// filter box contents. Rows without an id never reach this point; the
    /// button is disabled for them.
    pub fn delete_user(&self, user: &User) {
        let Some(user_id) = user.id else {
            return;
        };
        let repo = self.repository.clone();
        let vm = self.clone();
        spawn_local(async move {
            match repo.delete_user(user_id).await {
                Ok(()) => {
                    let filter = NameFilter::contains(&vm.user_filter.get_untracked());
                    vm.dispatch_users(ListAction::Reload(filter));
                }
                Err(err) => {
                    vm.dispatch_users(ListAction::MutationFailed(err.to_string()));
                }
            }
        });
    }

    pub fn open_create_franchise(&self) {
        browser::navigate_to("/admin-dashboard/create-franchise");
    }

    pub fn open_close_franchise(&self, franchise: Franchise) {
        selection::remember(selection::DashboardSelection::franchise(franchise));
        browser::navigate_to("/admin-dashboard/close-franchise");
    }

    pub fn open_close_store(&self, franchise: Franchise, store: Store) {
        selection::remember(selection::DashboardSelection::store(franchise, store));
        browser::navigate_to("/admin-dashboard/close-store");
    }
}

pub async fn load_franchises(
    repo: &AdminDashboardRepository,
    spec: FetchSpec,
) -> ListAction<Franchise> {
    match repo.fetch_franchises(&spec).await {
        Ok(page) => ListAction::Loaded {
            seq: spec.seq,
            items: page.franchises,
            more: page.more,
        },
        Err(err) => ListAction::Failed {
            seq: spec.seq,
            message: err.to_string(),
        },
    }
}

pub async fn load_users(repo: &AdminDashboardRepository, spec: FetchSpec) -> ListAction<User> {
    match repo.fetch_users(&spec).await {
        Ok(page) => ListAction::Loaded {
            seq: spec.seq,
            items: page.users,
            more: page.more,
        },
        Err(err) => ListAction::Failed {
            seq: spec.seq,
            message: err.to_string(),
        },
    }
}

/// Applies the action, and when the reducer asks for a fetch, runs it and
/// feeds the outcome back through the reducer. Stale responses are filtered
/// by the sequence number inside `reduce`.
fn dispatch<T, F, Fut>(
    list: RwSignal<PagedList<T>>,
    action: ListAction<T>,
    config: &ListConfig,
    fetch: F,
) where
    T: Clone + 'static,
    F: FnOnce(FetchSpec) -> Fut + 'static,
    Fut: Future<Output = ListAction<T>> + 'static,
{
    let (next, spec) = reduce(list.get_untracked(), action, config);
    list.set(next);
    if let Some(spec) = spec {
        let config = *config;
        spawn_local(async move {
            let outcome = fetch(spec).await;
            let (next, _) = reduce(list.get_untracked(), outcome, &config);
            list.set(next);
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{helpers, ssr::with_runtime};
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn non_admins_never_activate_the_lists() {
        for user in [Some(helpers::diner_user()), None] {
            with_runtime(|| {
                helpers::provide_auth(user.clone());
                let vm = use_admin_dashboard_view_model();
                assert!(!vm.is_admin.get_untracked());

                vm.activate_if_admin();
                let franchises = vm.franchises.get_untracked();
                assert!(!franchises.loading);
                assert!(franchises.items.is_empty());
                let users = vm.users.get_untracked();
                assert!(!users.loading);
                assert!(users.items.is_empty());
            });
        }
    }

    #[test]
    fn admins_pass_the_activation_gate() {
        with_runtime(|| {
            helpers::provide_auth(Some(helpers::admin_user()));
            let vm = use_admin_dashboard_view_model();
            assert!(vm.is_admin.get_untracked());
        });
    }

    fn repo(server: &MockServer) -> AdminDashboardRepository {
        let client = ApiClient::new_with_base_url(server.url("/api"));
        AdminDashboardRepository::new_with_client(Rc::new(client))
    }

    #[tokio::test]
    async fn load_franchises_turns_a_page_into_a_loaded_action() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/franchise")
                    .query_param("page", "0")
                    .query_param("limit", "3")
                    .query_param("name", "*");
                then.status(200).json_body(json!({
                    "franchises": [{ "id": 2, "name": "LotaPizza", "stores": [] }],
                    "more": true
                }));
            })
            .await;

        let spec = FetchSpec {
            seq: 7,
            page: 0,
            limit: 3,
            filter: NameFilter::any(),
        };
        let action = load_franchises(&repo(&server), spec).await;
        mock.assert_async().await;

        match action {
            ListAction::Loaded { seq, items, more } => {
                assert_eq!(seq, 7);
                assert_eq!(items[0].name, "LotaPizza");
                assert!(more);
            }
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn load_users_maps_failures_with_the_issuing_seq() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/user");
                then.status(500)
                    .json_body(json!({ "message": "service unavailable" }));
            })
            .await;

        let spec = FetchSpec {
            seq: 3,
            page: 1,
            limit: 10,
            filter: NameFilter::contains("kai"),
        };
        let action = load_users(&repo(&server), spec).await;

        match action {
            ListAction::Failed { seq, message } => {
                assert_eq!(seq, 3);
                assert_eq!(message, "service unavailable");
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }
}
