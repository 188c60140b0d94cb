use clap::Parser;
use dotenv::dotenv;

use stock_ledger_tui::api::ApiProvider;
use stock_ledger_tui::app::App;
use stock_ledger_tui::ledger::LedgerService;
use stock_ledger_tui::services::{PriceService, credentials};

#[derive(Parser)]
#[command(name = "stock-ledger-tui", about = "A terminal-based stock position ledger")]
struct Args {
    /// Path to the position store (CSV)
    #[arg(long, default_value = "positions.csv")]
    positions: String,

    /// Path to the transaction log
    #[arg(long, default_value = "transactions.txt")]
    log: String,

    /// Path to a single-line API credential file
    #[arg(long, default_value = "api_key.txt")]
    api_key_file: String,

    /// Price provider to start with
    #[arg(long, value_enum, default_value = "yahoo")]
    provider: ApiProvider,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();

    let positions_path = shellexpand::tilde(&args.positions).into_owned();
    let log_path = shellexpand::tilde(&args.log).into_owned();
    let key_path = shellexpand::tilde(&args.api_key_file).into_owned();

    let api_key = match credentials::read_api_key(&key_path) {
        Ok(key) => Some(key),
        Err(err) => {
            if args.provider.requires_api_key() {
                eprintln!(
                    "{}. Please create the file and add your {} API key.",
                    err,
                    args.provider.to_str()
                );
                return Ok(());
            }
            None
        }
    };

    let ledger = LedgerService::new(positions_path, log_path);
    let prices = PriceService::new(args.provider, api_key);

    let mut app = App::new(ledger, prices);
    app.run().await?;

    Ok(())
}
