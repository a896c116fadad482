use crate::schema::QuoteSet;
use futures::future;
use std::future::Future;
use thiserror::Error;

/// Failure of a quote batch, pinned to the first symbol that went wrong.
///
/// One error kind covers the lot: network failure, non-success HTTP status,
/// malformed payload. The caller gets a symbol and a human-readable cause,
/// nothing structured beyond that.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("failed to fetch {symbol}: {cause}")]
pub struct FetchError {
    pub symbol: String,
    pub cause: String,
}

impl FetchError {
    pub fn new(symbol: &str, cause: impl ToString) -> Self {
        let cause = cause.to_string();
        FetchError {
            symbol: symbol.to_string(),
            // some transport errors stringify to nothing useful
            cause: if cause.trim().is_empty() {
                "failed to load stock data".to_string()
            } else {
                cause
            },
        }
    }
}

/// The upstream quote capability; one retrieval per symbol.
///
/// The HTTP client implements this (see [`FinnhubClient`]); tests swap in an
/// in-memory source.
///
/// [`FinnhubClient`]: ../endp/finnhub/struct.FinnhubClient.html
pub trait QuoteSource {
    fn quote(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<crate::schema::Quote, FetchError>> + Send;
}

/// Fetch every symbol concurrently and join on the full batch.
///
/// All retrievals are launched together and the join waits for every one of
/// them to settle. Output order matches `symbols` regardless of the order in
/// which responses arrive. If any retrieval failed, the whole batch fails
/// with the first error in `symbols` order and every successful quote is
/// discarded; there is no partial result, no retry, and no timeout.
pub async fn fetch_all<S: QuoteSource>(
    source: &S,
    symbols: &[&str],
) -> Result<QuoteSet, FetchError> {
    let requests = symbols.iter().map(|symbol| source.quote(symbol));
    let settled = future::join_all(requests).await;

    let mut quotes = Vec::with_capacity(settled.len());
    for outcome in settled {
        quotes.push(outcome?);
    }
    Ok(quotes)
}
