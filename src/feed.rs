use crate::api::{Repository, SearchResponse};
use crate::error::FetchError;
use crate::pagination::Paginator;

/// Identifies one search. Only the most recently issued token is current.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Clone, Copy, Debug, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn begin(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

/// What the results area shows, in order of precedence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayState {
    Loading,
    Failed(&'static str),
    Results,
    Empty,
}

/// Results of the current search plus the page being viewed.
#[derive(Clone, Debug)]
pub struct FeedState {
    repositories: Vec<Repository>,
    total_count: u32,
    loading: bool,
    error: Option<FetchError>,
    page: usize,
    requests: RequestTracker,
}

impl Default for FeedState {
    // The view searches on mount, so it starts out loading.
    fn default() -> Self {
        Self {
            repositories: Vec::new(),
            total_count: 0,
            loading: true,
            error: None,
            page: 1,
            requests: RequestTracker::default(),
        }
    }
}

impl FeedState {
    pub fn begin(&mut self) -> RequestToken {
        self.loading = true;
        self.error = None;
        self.requests.begin()
    }

    /// Applies the outcome of the search identified by `token`.
    ///
    /// Returns `false` and leaves the state alone when a newer search has
    /// been issued since.
    pub fn complete(
        &mut self,
        token: RequestToken,
        result: Result<SearchResponse, FetchError>,
    ) -> bool {
        if !self.requests.is_current(token) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(response) => {
                self.repositories = response.items;
                self.total_count = response.total_count;
                self.error = None;
                self.page = 1;
            }
            Err(error) => {
                self.repositories.clear();
                self.total_count = 0;
                self.error = Some(error);
            }
        }
        true
    }

    pub fn display(&self) -> DisplayState {
        if self.loading {
            DisplayState::Loading
        } else if let Some(error) = &self.error {
            DisplayState::Failed(error.user_message())
        } else if self.repositories.is_empty() {
            DisplayState::Empty
        } else {
            DisplayState::Results
        }
    }

    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }

    /// Number of matches GitHub reports, which can exceed the fetched items.
    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    pub fn paginator(&self, page_size: usize) -> Paginator {
        Paginator::new(self.repositories.len(), page_size)
    }

    pub fn page(&self, page_size: usize) -> usize {
        self.paginator(page_size).clamp(self.page)
    }

    pub fn page_items(&self, page_size: usize) -> &[Repository] {
        self.paginator(page_size).slice(&self.repositories, self.page)
    }

    pub fn set_page(&mut self, page: usize, page_size: usize) {
        self.page = self.paginator(page_size).clamp(page);
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }
}
