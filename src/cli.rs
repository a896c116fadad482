use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Initial symbol filter to apply before the search prompt starts.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Print the fetched quotes as JSON and exit, skipping the prompt.
    #[arg(long)]
    pub json: bool,
}
