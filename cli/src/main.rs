mod format;
mod logging;
mod report;
mod tui;

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing::debug;
use trading_calendar_core::{parse_month, CalendarConfig, CalendarMonth, MockDayRecordSource, MonthViewUseCase};

use crate::logging::{init_logging, LogConfig};

#[derive(Parser)]
#[command(name = "tradecal")]
#[command(about = "Calendar view of daily trading performance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// First day of the week: 0-6 (0 = Sunday) or a day name
    #[arg(long, global = true, env = "TRADECAL_WEEK_START")]
    week_start: Option<String>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true, env = "TRADECAL_TODAY")]
    today: Option<String>,

    /// Seed for the generated trading data
    #[arg(long, global = true, env = "TRADECAL_SEED")]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, env = "TRADECAL_LOG", default_value = "warn")]
    log_level: String,

    /// Write logs to this file (required to see logs in the TUI)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive calendar (default)
    Tui {
        /// Month to open: YYYY-MM, this, next, prev, +N or -N
        month: Option<String>,
    },
    /// Print the month grid followed by the summary panels
    Show {
        /// Month to print: YYYY-MM, this, next, prev, +N or -N
        month: Option<String>,
    },
    /// Print the monthly summary and weekly breakdown
    Summary {
        /// Month to summarize: YYYY-MM, this, next, prev, +N or -N
        month: Option<String>,
        /// Emit JSON instead of tables
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, None | Some(Commands::Tui { .. }));
    let _log_guard = init_logging(&LogConfig {
        level: cli.log_level.clone(),
        file: cli.log_file.clone(),
        interactive,
    })?;

    let config = CalendarConfig::from_args(cli.week_start.as_deref(), cli.today.as_deref(), cli.seed)?;
    let today = config.today_or(Local::now().date_naive());
    let source = match config.seed {
        Some(seed) => MockDayRecordSource::with_seed(seed),
        None => MockDayRecordSource::new(),
    };
    debug!(seed = source.seed(), week_start = ?config.week_start, %today, "Configured calendar");

    let month_arg = match &cli.command {
        Some(Commands::Tui { month }) | Some(Commands::Show { month }) | Some(Commands::Summary { month, .. }) => {
            month.clone()
        }
        None => None,
    };
    let month = match month_arg {
        Some(m) => parse_month(&m, today)?,
        None => CalendarMonth::containing(today)?,
    };

    match cli.command {
        Some(Commands::Show { .. }) => {
            let view = MonthViewUseCase::new(&source, config.week_start).load(month, today)?;
            report::show_month(&view);
        }
        Some(Commands::Summary { json, .. }) => {
            let view = MonthViewUseCase::new(&source, config.week_start).load(month, today)?;
            if json {
                println!("{}", report::summary_json(&view)?);
            } else {
                report::show_summary(&view);
            }
        }
        Some(Commands::Tui { .. }) | None => {
            tui::run(source, config.week_start, month, today)?;
        }
    }
    Ok(())
}
