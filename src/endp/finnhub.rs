use crate::fetch::{FetchError, QuoteSource};
use crate::schema::Quote;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const QUOTE_URL: &str = "https://finnhub.io/api/v1/quote";

/// Finnhub REST client; one GET per quote.
///
/// The token travels as a query parameter, so any reqwest error is stripped
/// of its URL before it ends up in a log line or the error panel.
pub struct FinnhubClient {
    client: Client,
    token: String,
}

impl FinnhubClient {
    pub fn new(client: Client, token: String) -> Self {
        FinnhubClient { client, token }
    }
}

impl QuoteSource for FinnhubClient {
    async fn quote(&self, symbol: &str) -> Result<Quote, FetchError> {
        let url = format!("{QUOTE_URL}?symbol={symbol}&token={}", self.token);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::new(symbol, e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(symbol, format!("server returned {status}")));
        }

        let payload: QuotePayload = response
            .json()
            .await
            .map_err(|e| FetchError::new(symbol, e.without_url()))?;
        Ok(payload.into_quote(symbol))
    }
}

/// `quote` endpoint schema; the fields we don't read (`h`, `l`, `o`, `pc`,
/// `t`) are ignored on deserialization.
#[derive(Deserialize, Serialize, Debug)]
pub struct QuotePayload {
    /// Current price.
    #[serde(rename = "c", default)]
    pub current: Option<f64>,

    /// Percent change since previous close.
    #[serde(rename = "dp", default)]
    pub percent_change: Option<f64>,
}

impl QuotePayload {
    /// Finnhub answers 200 with an all-zero body for symbols it does not
    /// know, so a zero price is treated as absent rather than a real quote.
    /// A zero percent change on its own is a flat day and kept as-is.
    pub fn into_quote(self, symbol: &str) -> Quote {
        let price = finite(self.current).filter(|price| *price != 0.0);
        let change_percent = finite(self.percent_change);
        if price.is_none() {
            log::warn!("[{symbol}] no usable price in payload; rendering placeholder");
        }
        Quote::new(symbol, price, change_percent)
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_regular_payload() {
        let raw = r#"{"c":150.25,"d":1.78,"dp":1.2,"h":151.0,"l":148.7,"o":149.1,"pc":148.47,"t":1693000000}"#;
        let payload: QuotePayload = serde_json::from_str(raw).unwrap();
        let quote = payload.into_quote("AAPL");
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.price, Some(150.25));
        assert_eq!(quote.change_percent, Some(1.2));
    }

    #[test]
    fn null_and_missing_fields_become_absent() {
        let payload: QuotePayload = serde_json::from_str(r#"{"c":null}"#).unwrap();
        let quote = payload.into_quote("XXXX");
        assert_eq!(quote.price, None);
        assert_eq!(quote.change_percent, None);
    }

    #[test]
    fn zero_price_sentinel_is_absent_but_flat_change_is_kept() {
        let payload: QuotePayload = serde_json::from_str(r#"{"c":0,"dp":0}"#).unwrap();
        let quote = payload.into_quote("XXXX");
        assert_eq!(quote.price, None);
        assert_eq!(quote.change_percent, Some(0.0));
    }

    #[test]
    fn non_finite_values_become_absent() {
        let payload = QuotePayload {
            current: Some(f64::INFINITY),
            percent_change: Some(f64::NAN),
        };
        let quote = payload.into_quote("AAPL");
        assert_eq!(quote.price, None);
        assert_eq!(quote.change_percent, None);
    }
}
