mod commands;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dayplan_core::{Planner, PlannerConfig};

#[derive(Parser)]
#[command(name = "dayplan")]
#[command(about = "Inspect and mutate your dayplan schedule")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the schedule for a day
    Show {
        /// Date to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Add an event
    Add {
        title: String,

        /// Date the event belongs to (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Start time (HH:MM)
        #[arg(short, long)]
        start: String,

        /// End time (HH:MM)
        #[arg(short, long)]
        end: String,

        /// Category (e.g. work, meeting, exercise)
        #[arg(short, long, default_value = "other")]
        category: String,

        /// Repeat rule: "none", "daily", or "weekly:mon,wed"
        #[arg(short, long, default_value = "none")]
        repeat: String,
    },
    /// Move an event to a new start time
    Mv {
        /// Event id (prefix is enough)
        id: String,

        /// Date the event is shown on (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// New start time (HH:MM)
        #[arg(short, long)]
        start: String,
    },
    /// Change an event's end time
    Resize {
        /// Event id (prefix is enough)
        id: String,

        /// Date the event is shown on (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// New end time (HH:MM)
        #[arg(short, long)]
        end: String,
    },
    /// Remove an event
    Rm {
        /// Event id (prefix is enough)
        id: String,

        /// Date the event is shown on (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// For repeating events: remove the whole series, not just this day
        #[arg(long)]
        all: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = PlannerConfig::load()?;
    let mut planner = Planner::new(config.open_store());

    match cli.command {
        Commands::Show { date } => {
            let date = utils::parse_date_or_today(date.as_deref())?;
            commands::show::run(&planner, date)
        }
        Commands::Add {
            title,
            date,
            start,
            end,
            category,
            repeat,
        } => {
            let date = utils::parse_date_or_today(date.as_deref())?;
            commands::add::run(&mut planner, title, date, &start, &end, &category, &repeat)
        }
        Commands::Mv { id, date, start } => {
            let date = utils::parse_date_or_today(date.as_deref())?;
            commands::mv::run(&mut planner, &id, date, &start)
        }
        Commands::Resize { id, date, end } => {
            let date = utils::parse_date_or_today(date.as_deref())?;
            commands::resize::run(&mut planner, &id, date, &end)
        }
        Commands::Rm { id, date, all } => {
            let date = utils::parse_date_or_today(date.as_deref())?;
            commands::rm::run(&mut planner, &id, date, all)
        }
    }
}
