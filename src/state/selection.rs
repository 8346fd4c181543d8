use crate::{
    api::{Franchise, Store},
    utils::storage,
};
use leptos::*;
use serde::{Deserialize, Serialize};

const SELECTION_KEY: &str = "dashboard_selection";

/// The franchise/store the operator picked on the dashboard, carried over
/// to the close confirmation screens. Mirrored into sessionStorage so the
/// confirmation pages survive a full page load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardSelection {
    pub franchise: Option<Franchise>,
    pub store: Option<Store>,
}

impl DashboardSelection {
    pub fn franchise(franchise: Franchise) -> Self {
        Self {
            franchise: Some(franchise),
            store: None,
        }
    }

    pub fn store(franchise: Franchise, store: Store) -> Self {
        Self {
            franchise: Some(franchise),
            store: Some(store),
        }
    }
}

pub fn provide_selection() {
    provide_context(create_rw_signal(DashboardSelection::default()));
}

pub fn use_selection() -> RwSignal<DashboardSelection> {
    use_context::<RwSignal<DashboardSelection>>()
        .unwrap_or_else(|| create_rw_signal(DashboardSelection::default()))
}

pub fn remember(selection: DashboardSelection) {
    if let Ok(json) = serde_json::to_string(&selection) {
        if let Ok(storage) = storage::session_storage() {
            let _ = storage.set_item(SELECTION_KEY, &json);
        }
    }
    use_selection().set(selection);
}

/// Current selection: the context signal when populated, otherwise whatever
/// sessionStorage still holds.
pub fn recall() -> DashboardSelection {
    let current = use_selection().get_untracked();
    if current.franchise.is_some() {
        return current;
    }
    storage::session_storage()
        .ok()
        .and_then(|storage| storage.get_item(SELECTION_KEY).ok().flatten())
        .and_then(|json| serde_json::from_str(&json).ok())
        .unwrap_or_default()
}

pub fn forget() {
    if let Ok(storage) = storage::session_storage() {
        let _ = storage.remove_item(SELECTION_KEY);
    }
    use_selection().set(DashboardSelection::default());
}
