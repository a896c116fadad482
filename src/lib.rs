pub mod cli;
pub mod endp;
pub mod fetch;
pub mod filter;
pub mod schema;
pub mod state;
pub mod ui;

pub use fetch::{fetch_all, FetchError, QuoteSource};
pub use schema::{Quote, QuoteSet, TICKERS};
pub use state::{Dashboard, FetchState};
