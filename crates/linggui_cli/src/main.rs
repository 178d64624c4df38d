mod render;

use clap::{Parser, Subcommand};
use linggui_rs::{DateInput, LingGuiError, ReadingRequest, get_stem_branch, reading};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `LINGGUI_LOG=debug`).
const LOG_ENV: &str = "LINGGUI_LOG";

#[derive(Parser)]
#[command(name = "linggui", about = "Ling Gui Ba Fa stem-branch and acupoint calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Day and hour stem-branch for a date and hour
    StemBranch {
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Hour 0-23; defaults to the current hour
        #[arg(long)]
        hour: Option<u32>,
    },
    /// Open acupoint with the full working
    Acupoint {
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,
        /// Hour 0-23; defaults to the current hour
        #[arg(long)]
        hour: Option<u32>,
        /// Minute 0-59; shown only, the double hour ignores it
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..60))]
        minute: Option<u32>,
    },
    /// Print the day/hour weight tables
    Weights,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn request(date: Option<String>, hour: Option<u32>) -> ReadingRequest {
    ReadingRequest {
        date: date.map_or(DateInput::Today, DateInput::Text),
        hour,
    }
}

fn fail(e: LingGuiError) -> ! {
    error!(%e, "calculation failed");
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::StemBranch { date, hour } => {
            let req = request(date, hour);
            let (date, hour) = req.resolve().unwrap_or_else(|e| fail(e));
            let p = get_stem_branch(&DateInput::Date(date), hour).unwrap_or_else(|e| fail(e));
            println!("{date} {hour:02}时");
            print!("{}", render::pillars(&p));
        }

        Commands::Acupoint { date, hour, minute } => {
            let req = request(date, hour);
            let r = reading(&req).unwrap_or_else(|e| fail(e));
            debug!(?minute, "minute ignored by double-hour mapping");
            match minute {
                Some(m) => println!("{} {:02}:{m:02}", r.date, r.hour),
                None => println!("{} {:02}时", r.date, r.hour),
            }
            print!("{}", render::pillars(&r.pillars));
            print!("{}", render::working(&r.result));
        }

        Commands::Weights => {
            print!("{}", render::weight_tables());
        }
    }
}
