use leptos::*;
use leptos_router::*;

use crate::{
    components::not_found::NotFound,
    pages::{
        AdminDashboardPage, CloseFranchisePage, CloseStorePage, CreateFranchisePage, HomePage,
        LoginPage,
    },
    state::{auth::AuthProvider, selection},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/admin-dashboard",
    "/admin-dashboard/create-franchise",
    "/admin-dashboard/close-franchise",
    "/admin-dashboard/close-store",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &[
    "/admin-dashboard",
    "/admin-dashboard/create-franchise",
    "/admin-dashboard/close-franchise",
    "/admin-dashboard/close-store",
];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    selection::provide_selection();
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/admin-dashboard" view=AdminDashboardPage/>
                    <Route path="/admin-dashboard/create-franchise" view=CreateFranchisePage/>
                    <Route path="/admin-dashboard/close-franchise" view=CloseFranchisePage/>
                    <Route path="/admin-dashboard/close-store" view=CloseStorePage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}
