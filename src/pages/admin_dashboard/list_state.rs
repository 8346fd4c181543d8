use crate::api::NameFilter;

/// Per-table pagination rules. The franchise and user endpoints of the
/// pizza service paginate differently, so each table carries its own
/// config instead of normalizing the difference away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    pub first_page: u32,
    pub page_size: u32,
    pub filter_page_size: u32,
    pub reset_page_on_filter: bool,
}

/// Franchises: 0-based pages, 3 rows on activation and pagination, 10 rows
/// once a filter is submitted, and a filter submit keeps the current page.
pub static FRANCHISE_LIST: ListConfig = ListConfig {
    first_page: 0,
    page_size: 3,
    filter_page_size: 10,
    reset_page_on_filter: false,
};

/// Users: 1-based pages, 10 rows everywhere, and a filter submit jumps back
/// to the first page.
pub static USER_LIST: ListConfig = ListConfig {
    first_page: 1,
    page_size: 10,
    filter_page_size: 10,
    reset_page_on_filter: true,
};

/// A single issued fetch. The sequence number decides which in-flight
/// response is allowed to land.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSpec {
    pub seq: u64,
    pub page: u32,
    pub limit: u32,
    pub filter: NameFilter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    pub items: Vec<T>,
    pub more: bool,
    pub page: u32,
    pub filter: NameFilter,
    pub loading: bool,
    pub error: Option<String>,
    seq: u64,
    last_request: Option<FetchSpec>,
}

impl<T> PagedList<T> {
    pub fn new(config: &ListConfig) -> Self {
        Self {
            items: Vec::new(),
            more: false,
            page: config.first_page,
            filter: NameFilter::any(),
            loading: false,
            error: None,
            seq: 0,
            last_request: None,
        }
    }

    pub fn prev_disabled(&self, config: &ListConfig) -> bool {
        self.page <= config.first_page
    }

    pub fn next_disabled(&self) -> bool {
        !self.more
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListAction<T> {
    /// The table became visible to an authorized operator.
    Activated,
    /// Pagination button pressed; the caller decides what the filter
    /// becomes (franchises reset it, users keep the box contents).
    PageChanged { page: u32, filter: NameFilter },
    /// Filter form submitted.
    FilterSubmitted(NameFilter),
    /// Re-fetch the current page, e.g. after a delete.
    Reload(NameFilter),
    /// Re-issue the last request after a failure.
    Retry,
    /// A row action (e.g. delete) failed. Bumps the sequence so an in-flight
    /// list fetch cannot land afterwards and clear the error.
    MutationFailed(String),
    /// A fetch came back. Stale sequence numbers are discarded.
    Loaded { seq: u64, items: Vec<T>, more: bool },
    Failed { seq: u64, message: String },
}

/// Pure transition function: applies `action` to `state` and returns the
/// next state plus the fetch the caller must perform, if any. All pagination
/// and staleness rules live here.
pub fn reduce<T>(
    mut state: PagedList<T>,
    action: ListAction<T>,
    config: &ListConfig,
) -> (PagedList<T>, Option<FetchSpec>) {
    match action {
        ListAction::Activated => {
            let page = state.page;
            let filter = state.filter.clone();
            issue(state, page, config.page_size, filter)
        }
        ListAction::PageChanged { page, filter } => {
            issue(state, page.max(config.first_page), config.page_size, filter)
        }
        ListAction::FilterSubmitted(filter) => {
            let page = if config.reset_page_on_filter {
                config.first_page
            } else {
                state.page
            };
            issue(state, page, config.filter_page_size, filter)
        }
        ListAction::Reload(filter) => {
            let page = state.page;
            issue(state, page, config.filter_page_size, filter)
        }
        ListAction::Retry => match state.last_request.clone() {
            Some(last) => issue(state, last.page, last.limit, last.filter),
            None => (state, None),
        },
        ListAction::MutationFailed(message) => {
            state.seq += 1;
            state.loading = false;
            state.error = Some(message);
            (state, None)
        }
        ListAction::Loaded { seq, items, more } => {
            if seq != state.seq {
                return (state, None);
            }
            state.items = items;
            state.more = more;
            state.loading = false;
            state.error = None;
            (state, None)
        }
        ListAction::Failed { seq, message } => {
            if seq != state.seq {
                return (state, None);
            }
            state.loading = false;
            state.error = Some(message);
            (state, None)
        }
    }
}

fn issue<T>(
    mut state: PagedList<T>,
    page: u32,
    limit: u32,
    filter: NameFilter,
) -> (PagedList<T>, Option<FetchSpec>) {
    state.page = page;
    state.filter = filter.clone();
    state.loading = true;
    state.error = None;
    state.seq += 1;
    let spec = FetchSpec {
        seq: state.seq,
        page,
        limit,
        filter,
    };
    state.last_request = Some(spec.clone());
    (state, Some(spec))
}
