use api_client::{ApiClient, RestClient};
use clap::{Parser, Subcommand, ValueEnum};
use configuration::Config;
use desk::etf_list::TITLE;
use desk::table::{etf_table, instrument_table};
use desk::{EtfListView, EtfSource, SellTradeForm, SellTradeInput, SortControl, SubmitOutcome};
use executor::LiveExecutor;
use std::net::SocketAddr;
use std::sync::Arc;

/// The main entry point for the ETF desk application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load ETF_DESK_* variables from a .env file, if there is one.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut config = configuration::load_config(&cli.config)?;
    let _log_guard = configuration::init_tracing(&config.logging)?;
    tracing::debug!(config = %cli.config, base_url = %config.api.base_url, "Configuration ready");

    // Execute the appropriate command
    match cli.command {
        Commands::Etfs(args) => handle_etfs(args, &config).await,
        Commands::Portfolio => handle_portfolio(&config).await,
        Commands::Sell(args) => handle_sell(args, &config).await,
        Commands::Serve(args) => {
            if let Some(addr) = args.addr {
                config.server.addr = addr;
            }
            web_server::run_server(&config).await
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Browse ETFs and sell portfolio holdings.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (optional; defaults apply when missing).
    #[arg(long, global = true, default_value = "config.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the ETF table, optionally after a sequence of sort clicks.
    Etfs(EtfsArgs),
    /// List the holdings of the configured portfolio.
    Portfolio,
    /// Submit a sell trade for one holding.
    Sell(SellArgs),
    /// Run the mock trade desk backend.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct EtfsArgs {
    /// Which dataset to load.
    #[arg(long, value_enum, default_value_t = SourceArg::All)]
    source: SourceArg,

    /// Sort buttons to click, in order (repeatable).
    #[arg(long = "sort", value_enum)]
    sort: Vec<SortArg>,
}

#[derive(Parser)]
struct SellArgs {
    /// Id of the instrument to sell.
    #[arg(long)]
    instrument_id: String,

    /// Number of units to sell.
    #[arg(long)]
    quantity: String,

    /// Price to sell at.
    #[arg(long)]
    target_price: String,
}

#[derive(Parser)]
struct ServeArgs {
    /// Address to listen on, overriding `server.addr`.
    #[arg(long)]
    addr: Option<SocketAddr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SourceArg {
    All,
    ExpenseRatio,
}

impl From<SourceArg> for EtfSource {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::All => EtfSource::All,
            SourceArg::ExpenseRatio => EtfSource::ExpenseRatio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortArg {
    All,
    Er,
    AumBill,
    #[value(name = "3m-tr")]
    ThreeMonthTr,
}

impl From<SortArg> for SortControl {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::All => SortControl::All,
            SortArg::Er => SortControl::ExpenseRatio,
            SortArg::AumBill => SortControl::Aum,
            SortArg::ThreeMonthTr => SortControl::ThreeMonthReturn,
        }
    }
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn api_client(config: &Config) -> anyhow::Result<Arc<dyn ApiClient>> {
    Ok(Arc::new(RestClient::new(&config.api)?))
}

/// Loads the listing, replays the requested clicks and prints the table.
async fn handle_etfs(args: EtfsArgs, config: &Config) -> anyhow::Result<()> {
    let mut view = EtfListView::new(api_client(config)?);
    view.load(args.source.into()).await;

    if let Some(message) = view.error_message() {
        anyhow::bail!("{}", message);
    }

    for control in args.sort {
        view.click(control.into());
    }

    let controls: Vec<_> = SortControl::all().iter().map(|c| format!("[{}]", c.label())).collect();
    println!("{}  {}", TITLE, controls.join(" "));
    println!("{}", etf_table(&view.rows()));
    Ok(())
}

async fn handle_portfolio(config: &Config) -> anyhow::Result<()> {
    let mut form = SellTradeForm::new(
        Arc::new(LiveExecutor::new(api_client(config)?)),
        config.account.clone(),
    );
    form.load_portfolio_instruments().await;

    if let Some(message) = form.error_message() {
        anyhow::bail!("{}", message);
    }
    println!("{}", instrument_table(form.portfolio_instruments()));
    Ok(())
}

/// Submits one sell trade and prints the notification the form shows.
async fn handle_sell(args: SellArgs, config: &Config) -> anyhow::Result<()> {
    let mut form = SellTradeForm::new(
        Arc::new(LiveExecutor::new(api_client(config)?)),
        config.account.clone(),
    );
    form.load_portfolio_instruments().await;
    form.set_value(SellTradeInput::new(args.instrument_id, args.quantity, args.target_price));

    match form.submit().await {
        SubmitOutcome::Executed(result) => {
            println!(
                "{} (trade {}, {} at {})",
                form.success_message().unwrap_or_default(),
                result.trade_id,
                result.cash_value,
                result.execution_price
            );
            println!("{}", instrument_table(form.portfolio_instruments()));
        }
        SubmitOutcome::Failed(message) => anyhow::bail!("{}", message),
        SubmitOutcome::Invalid(errors) => {
            let messages: Vec<String> = [errors.instrument_id, errors.quantity, errors.target_price]
                .into_iter()
                .flatten()
                .collect();
            anyhow::bail!("{}", messages.join("; "));
        }
    }
    Ok(())
}
