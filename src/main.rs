use clap::Parser;
use tradedesk::cli::commands::{Cli, Commands};
use tradedesk::domain::entities::trade::TradeDraft;
use tradedesk::domain::ports::trade_repository::TradeFilter;
use tradedesk::TradeDesk;

fn main() {
    let cli = Cli::parse();
    let db_path = std::env::var("TRADEDESK_DB").unwrap_or_else(|_| "./tradedesk.db".into());

    let desk = match TradeDesk::new(&db_path) {
        Ok(desk) => desk,
        Err(e) => {
            eprintln!("Error opening trade journal: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(desk, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_command(desk: TradeDesk, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Add { owner, json } => {
            let draft: TradeDraft = serde_json::from_str(&json)?;
            let trade = desk.trade_add(&owner, draft)?;
            println!("{}", serde_json::to_string_pretty(&trade)?);
        }
        Commands::Update { id, json } => {
            let draft: TradeDraft = serde_json::from_str(&json)?;
            let trade = desk.trade_update(&id, draft)?;
            println!("{}", serde_json::to_string_pretty(&trade)?);
        }
        Commands::Delete { id } => {
            desk.trade_delete(&id)?;
            println!("Trade {id} deleted");
        }
        Commands::Get { id } => match desk.trade_get(&id)? {
            Some(trade) => println!("{}", serde_json::to_string_pretty(&trade)?),
            None => println!("null"),
        },
        Commands::List {
            asset,
            owner,
            limit,
        } => {
            let trades = desk.trade_list(TradeFilter {
                owner_id: owner,
                asset,
                limit,
            })?;
            println!("{}", serde_json::to_string_pretty(&trades)?);
        }
        Commands::Weekly { filter, owner } => {
            let groups = desk.weekly_report(owner.as_deref(), &filter)?;
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
        Commands::Export { owner } => {
            let trades = desk.trade_list(TradeFilter {
                owner_id: owner,
                ..TradeFilter::default()
            })?;
            println!("{}", serde_json::to_string_pretty(&trades)?);
        }
    }
    Ok(())
}
