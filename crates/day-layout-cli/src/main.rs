//! `daylayout` CLI — lay out a day column from a JSON schedule.
//!
//! ## Usage
//!
//! ```sh
//! # Full day layout (stdin → stdout), "now" taken from the system clock
//! cat schedule.json | daylayout layout --day 2026-03-16
//!
//! # Pin the clock and resolve UTC timestamps to the clinic's wall clock
//! daylayout layout -i schedule.json --day 2026-03-16 \
//!   --now 2026-03-16T10:15:00 --timezone America/Chicago --pretty
//!
//! # Only the visible window and its pixel height
//! daylayout window -i schedule.json --day 2026-03-16
//!
//! # Items that fall on a day
//! daylayout filter -i schedule.json --day 2026-03-16 -o today.json
//! ```
//!
//! Input is a JSON array of appointments (`start`/`end`) and tasks (`due`).
//! Logs go to stderr; `RUST_LOG` overrides `-v`/`-q`.

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use clap::{ArgAction, Args, Parser, Subcommand};
use day_layout::records::{parse_day, parse_local_datetime, parse_schedule_json, parse_timezone};
use day_layout::queries::split_all_day;
use day_layout::{day_window_for_date, events_for_day, layout_day, ScheduleItem};
use serde::Serialize;
use std::io::{self, IsTerminal, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "daylayout",
    version,
    about = "Day-view calendar layout from a JSON schedule"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Less log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    quiet: u8,
}

#[derive(Args)]
struct Common {
    /// Input JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Day to lay out, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    day: Option<String>,
    /// IANA timezone used to resolve offset timestamps and the clock
    #[arg(long)]
    timezone: Option<String>,
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Full layout: window, placed events, all-day ribbon, now-line
    Layout {
        #[command(flatten)]
        common: Common,
        /// Current time, overriding the system clock
        #[arg(long)]
        now: Option<String>,
    },
    /// Visible window and total pixel height for the day
    Window {
        #[command(flatten)]
        common: Common,
    },
    /// Items that fall on the day
    Filter {
        #[command(flatten)]
        common: Common,
    },
}

#[derive(Serialize)]
struct WindowReport {
    day: NaiveDate,
    window_start: u32,
    window_end: u32,
    total_height_px: f64,
    /// Timed events on the grid; all-day events are not counted.
    events: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet)?;

    match cli.command {
        Commands::Layout { common, now } => {
            let tz = resolve_timezone(common.timezone.as_deref())?;
            let items = read_schedule(&common)?;
            let now = match now.as_deref() {
                Some(value) => parse_local_datetime(value, tz)
                    .with_context(|| format!("Invalid --now value: {}", value))?,
                None => current_local_time(tz),
            };
            let day = resolve_day(common.day.as_deref(), || now.date())?;

            let layout = layout_day(&items, day, now);
            info!(
                %day,
                events = layout.events.len(),
                all_day = layout.all_day.len(),
                window_start = layout.window.window_start,
                window_end = layout.window.window_end,
                "laid out day"
            );
            write_json(&common, &layout)?;
        }
        Commands::Window { common } => {
            let tz = resolve_timezone(common.timezone.as_deref())?;
            let items = read_schedule(&common)?;
            let day = resolve_day(common.day.as_deref(), || current_local_time(tz).date())?;

            let window = day_window_for_date(&items, day);
            let on_day = events_for_day(&items, day);
            let (_, timed) = split_all_day(&on_day, day);
            let report = WindowReport {
                day,
                window_start: window.window_start,
                window_end: window.window_end,
                total_height_px: window.total_height_px(),
                events: timed.len(),
            };
            debug!(%day, ?window, "computed window");
            write_json(&common, &report)?;
        }
        Commands::Filter { common } => {
            let tz = resolve_timezone(common.timezone.as_deref())?;
            let items = read_schedule(&common)?;
            let day = resolve_day(common.day.as_deref(), || current_local_time(tz).date())?;

            let on_day = events_for_day(&items, day);
            info!(%day, kept = on_day.len(), total = items.len(), "filtered schedule");
            write_json(&common, &on_day)?;
        }
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over the flags.
fn init_tracing(verbose: u8, quiet: u8) -> Result<()> {
    let default_level = match (quiet, verbose) {
        (q, _) if q >= 2 => "error",
        (1, _) => "warn",
        (_, v) if v >= 3 => "trace",
        (_, 2) => "debug",
        (_, 1) => "info",
        _ => "warn",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}

fn resolve_timezone(name: Option<&str>) -> Result<Option<Tz>> {
    name.map(parse_timezone)
        .transpose()
        .context("Invalid --timezone value")
}

/// Wall-clock "now", in `tz` when given and the system zone otherwise.
fn current_local_time(tz: Option<Tz>) -> NaiveDateTime {
    match tz {
        Some(tz) => Utc::now().with_timezone(&tz).naive_local(),
        None => Local::now().naive_local(),
    }
}

/// The `--day` value, or `today()` when the flag is absent.
fn resolve_day(day: Option<&str>, today: impl FnOnce() -> NaiveDate) -> Result<NaiveDate> {
    match day {
        Some(value) => parse_day(value).with_context(|| format!("Invalid --day value: {}", value)),
        None => Ok(today()),
    }
}

fn read_schedule(common: &Common) -> Result<Vec<ScheduleItem>> {
    let json = read_input(common.input.as_deref())?;
    let items = parse_schedule_json(&json, common.timezone.as_deref())
        .context("Failed to parse schedule JSON")?;
    debug!(items = items.len(), "parsed schedule");
    Ok(items)
}

fn write_json<T: Serialize>(common: &Common, value: &T) -> Result<()> {
    let mut json = if common.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    json.push('\n');
    write_output(common.output.as_deref(), &json)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
