use crate::schema::QuoteSet;

/// Case-insensitive substring filter over a quote set.
///
/// The query is trimmed and lowercased; an empty normalized query matches
/// everything. Matching is substring anywhere in the symbol, not prefix-only.
/// Output keeps the input order; no match yields an empty set, which the
/// display layer renders as "No matches." rather than an error.
///
/// Pure and linear in the set size, so it can run on every keystroke of the
/// search prompt against the cached fetch result.
pub fn filter(quotes: &QuoteSet, query: &str) -> QuoteSet {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return quotes.clone();
    }
    quotes
        .iter()
        .filter(|quote| quote.symbol.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Quote;

    fn sample() -> QuoteSet {
        vec![
            Quote::new("AAPL", Some(150.25), Some(1.2)),
            Quote::new("MSFT", Some(310.10), Some(-0.5)),
            Quote::new("GOOGL", Some(2800.00), Some(0.0)),
        ]
    }

    #[test]
    fn empty_query_is_identity() {
        let quotes = sample();
        assert_eq!(filter(&quotes, ""), quotes);
        assert_eq!(filter(&quotes, "   "), quotes);
    }

    #[test]
    fn case_insensitive() {
        let quotes = sample();
        assert_eq!(filter(&quotes, "aapl"), filter(&quotes, "AAPL"));
        assert_eq!(filter(&quotes, "aapl").len(), 1);
    }

    #[test]
    fn matches_substring_anywhere() {
        let quotes = sample();
        let hits = filter(&quotes, "SF");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].symbol, "MSFT");
    }

    #[test]
    fn no_match_yields_empty_set() {
        let quotes = sample();
        assert_eq!(filter(&quotes, "ZZZZ"), vec![]);
    }

    #[test]
    fn preserves_order() {
        let quotes = sample();
        let hits = filter(&quotes, "l");
        let symbols: Vec<&str> = hits.iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "GOOGL"]);
    }

    #[test]
    fn idempotent() {
        let quotes = sample();
        for query in ["", "ms", "GOOGL", "zz"] {
            let once = filter(&quotes, query);
            assert_eq!(filter(&once, query), once);
        }
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let quotes = sample();
        assert_eq!(filter(&quotes, "  msft "), filter(&quotes, "msft"));
    }
}
