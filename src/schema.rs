use serde::{Deserialize, Serialize};

/// Ticker symbols shown on the board, in display order.
///
/// Fixed at compile time; the request set and the table rows both follow
/// this order.
pub const TICKERS: [&str; 7] = ["AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "META", "TSLA"];

/// A snapshot of one symbol's current price and percent change.
/// ```json
/// {
///     "symbol": "AAPL",
///     "price": 150.25,
///     "change_percent": 1.2
/// }
/// ```
/// `price`/`change_percent` are `None` when the upstream source has nothing
/// for the symbol (unlisted, suspended, or a degenerate payload); the display
/// layer renders a placeholder, not an error.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Quote {
    pub symbol: String,
    pub price: Option<f64>,
    pub change_percent: Option<f64>,
}

/// One fetch cycle's output: a quote per requested symbol, in request order.
pub type QuoteSet = Vec<Quote>;

impl Quote {
    pub fn new(symbol: &str, price: Option<f64>, change_percent: Option<f64>) -> Self {
        Quote {
            symbol: symbol.to_string(),
            price,
            change_percent,
        }
    }
}
