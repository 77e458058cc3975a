use crate::demo::{run_cities, run_listings, run_quote, CitiesArgs, ListingsArgs, QuoteArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rental_market::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Rental Marketplace",
    about = "Serve and exercise the rental marketplace search and pricing core",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Rank catalog cities for a query, or list popular cities without one
    Cities(CitiesArgs),
    /// Price a stay: upfront total, fees and landlord payment schedule
    Quote(QuoteArgs),
    /// Filter and page through seeded listing fixtures
    Listings(ListingsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Cities(args) => run_cities(args),
        Command::Quote(args) => run_quote(args),
        Command::Listings(args) => run_listings(args),
    }
}
