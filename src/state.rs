use crate::fetch::FetchError;
use crate::filter::filter;
use crate::schema::QuoteSet;

/// Lifecycle of the single startup fetch.
///
/// `Loading` holds from construction until the fetch resolves; `Ready` and
/// `Failed` are both terminal (there is no refresh in this system).
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Ready(QuoteSet),
    Failed(String),
}

/// The dashboard's whole state: fetch lifecycle plus the current search
/// query. The render layer reads from here and never mutates anything else.
#[derive(Debug)]
pub struct Dashboard {
    fetch: FetchState,
    query: String,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Dashboard {
            fetch: FetchState::Loading,
            query: String::new(),
        }
    }

    /// Settle the startup fetch. Valid exactly once, out of `Loading`; a
    /// second call is ignored since both resolved states are terminal.
    pub fn resolve(&mut self, outcome: Result<QuoteSet, FetchError>) {
        if self.fetch != FetchState::Loading {
            log::warn!("fetch already resolved; dropping late result");
            return;
        }
        self.fetch = match outcome {
            Ok(quotes) => FetchState::Ready(quotes),
            Err(e) => FetchState::Failed(e.to_string()),
        };
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    /// The rows the table should show right now: the cached quote set put
    /// through the current query. `None` until the fetch has succeeded.
    pub fn visible(&self) -> Option<QuoteSet> {
        match &self.fetch {
            FetchState::Ready(quotes) => Some(filter(quotes, &self.query)),
            _ => None,
        }
    }
}
