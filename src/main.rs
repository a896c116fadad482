use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::io::{self, Write};

use quoteboard::{
    cli::Cli,
    endp::finnhub::FinnhubClient,
    fetch::fetch_all,
    schema::TICKERS,
    state::{Dashboard, FetchState},
    ui,
};

fn preprocess() {
    dotenv::dotenv().ok();
    env_logger::init();
}

fn client() -> Result<reqwest::Client> {
    let mut builder = reqwest::ClientBuilder::new();
    if let Ok(agent) = env::var("USER_AGENT") {
        builder = builder.user_agent(agent);
    }
    Ok(builder.build()?)
}

#[tokio::main]
async fn main() -> Result<()> {
    preprocess();

    let cli = Cli::parse();
    log::info!("Command line input recorded: {cli:#?}");

    let token = env::var("FINNHUB_TOKEN")
        .context("FINNHUB_TOKEN is not set; export it or add it to a .env file")?;
    let source = FinnhubClient::new(client()?, token);

    let mut board = Dashboard::new();
    if let Some(query) = &cli.query {
        board.set_query(query);
    }

    // the one fetch cycle of this process; no polling, no refresh
    let spinner = ui::fetch_spinner();
    let outcome = fetch_all(&source, &TICKERS).await;
    spinner.finish_and_clear();
    board.resolve(outcome);

    if let FetchState::Failed(message) = board.fetch_state() {
        eprintln!("{}", ui::render_error(message));
        std::process::exit(1);
    }

    if cli.json {
        if let FetchState::Ready(quotes) = board.fetch_state() {
            println!("{}", serde_json::to_string_pretty(quotes)?);
        }
        return Ok(());
    }

    if let Some(rows) = board.visible() {
        println!("{}", ui::render_table(&rows));
    }
    search_loop(&mut board)
}

/// Re-filter the cached quote set on every line of input; never re-fetches.
fn search_loop(board: &mut Dashboard) -> Result<()> {
    println!("Type to filter symbols (blank line shows all, Ctrl-D quits).");
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("search> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        board.set_query(line.trim());
        if let Some(rows) = board.visible() {
            println!("{}", ui::render_table(&rows));
        }
    }
    Ok(())
}
