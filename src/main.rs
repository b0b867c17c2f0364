mod commands;
mod form;
mod notify;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use salon_core::Viewport;

#[derive(Parser)]
#[command(name = "salon")]
#[command(about = "Manage wedding-hall event bookings from your terminal")]
struct Cli {
    /// Viewport width in logical pixels; 768 or less switches to compact
    /// event titles
    #[arg(long, global = true, default_value_t = 1024)]
    viewport_width: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month calendar
    Calendar {
        /// Month to display (YYYY-MM, defaults to the current month)
        #[arg(long)]
        month: Option<String>,
    },
    /// List events in date order
    List {
        /// Only events in this month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
    },
    /// Show one event in full
    Show {
        id: String,

        /// Print the raw wire representation instead
        #[arg(long)]
        json: bool,
    },
    /// Book a new event
    Add {
        /// Event date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// Edit an existing booking
    Edit { id: String },
    /// Delete a booking
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Save the API bearer token
    Login { token: String },
    /// Discard the saved API bearer token
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let viewport = Viewport::new(cli.viewport_width);

    match cli.command {
        Commands::Calendar { month } => commands::calendar::run(month.as_deref(), viewport).await,
        Commands::List { month } => commands::list::run(month.as_deref(), viewport).await,
        Commands::Show { id, json } => commands::show::run(&id, json).await,
        Commands::Add { date } => commands::add::run(date.as_deref(), viewport).await,
        Commands::Edit { id } => commands::edit::run(&id, viewport).await,
        Commands::Delete { id, yes } => commands::delete::run(&id, yes, viewport).await,
        Commands::Login { token } => commands::login::login(&token),
        Commands::Logout => commands::login::logout(),
    }
}
