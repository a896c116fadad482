use crate::schema::QuoteSet;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Rendered for absent price/change values.
const PLACEHOLDER: &str = "—";

pub fn fetch_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap(),
    );
    pb.set_message("Fetching latest market data...");
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Symbol / price / percent-change table, one row per quote.
pub fn render_table(quotes: &QuoteSet) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<8} {:>12} {:>12}\n",
        "SYMBOL", "PRICE ($)", "CHANGE (%)"
    ));

    if quotes.is_empty() {
        out.push_str("No matches.\n");
        return out;
    }

    for quote in quotes {
        let symbol = format!("{:<8}", quote.symbol).bold();
        let price = format!(
            "{:>12}",
            quote
                .price
                .map(|p| format!("{p:.2}"))
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        );
        let change = match quote.change_percent {
            Some(dp) if dp > 0.0 => format!("{:>12}", format!("+{dp:.2}%")).green().to_string(),
            Some(dp) if dp < 0.0 => format!("{:>12}", format!("{dp:.2}%")).red().to_string(),
            Some(dp) => format!("{:>12}", format!("{dp:.2}%")),
            None => format!("{:>12}", PLACEHOLDER),
        };
        out.push_str(&format!("{symbol} {price} {change}\n"));
    }
    out
}

pub fn render_error(message: &str) -> String {
    format!(
        "{}\n{}\n{}\n",
        "Error loading data".red().bold(),
        message.red(),
        "(Check your API key / rate limit.)".dimmed()
    )
}
