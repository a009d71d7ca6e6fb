use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tradedesk", about = "Team trade journal with weekly win/loss rollups")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a trade
    Add {
        /// User recording the trade
        #[arg(long)]
        owner: String,
        /// JSON with date, time, asset, strategy, entry, stop_loss, take_profit, profit_loss, notes
        json: String,
    },
    /// Edit an existing trade
    Update {
        /// Trade ID
        id: String,
        /// Same JSON shape as `add`
        json: String,
    },
    /// Delete a trade
    Delete {
        /// Trade ID
        id: String,
    },
    /// Show a single trade
    Get {
        /// Trade ID
        id: String,
    },
    /// List trades, newest first
    List {
        /// Case-insensitive asset substring
        #[arg(long)]
        asset: Option<String>,
        /// Only this user's trades
        #[arg(long)]
        owner: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Trades grouped by calendar week with win/loss totals
    Weekly {
        /// Case-insensitive asset substring
        #[arg(long, default_value = "")]
        filter: String,
        /// Only this user's trades
        #[arg(long)]
        owner: Option<String>,
    },
    /// Export trades as JSON
    Export {
        /// Only this user's trades
        #[arg(long)]
        owner: Option<String>,
    },
}
