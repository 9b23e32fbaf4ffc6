//! Workout timer entry point.

use std::{fs::File, path::PathBuf, sync::Mutex, time::Duration};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use workout_timer_core::{CommandError, Mode};
use workout_timer_tui::{App, AppAction, Config, Runtime, TerminalDriver};

/// How long a poll waits for input before the clock is ticked.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Terminal interval timer for workouts
#[derive(Parser, Debug)]
#[command(name = "workout-timer")]
#[command(about = "Terminal interval timer for workouts")]
#[command(version)]
struct Args {
    /// Config file (defaults to $XDG_CONFIG_HOME/workout-timer/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Mode for `set` commands that do not name one
    #[arg(short, long, value_parser = parse_mode)]
    mode: Option<Mode>,

    /// Log level filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write logs to this file. Logs are discarded otherwise.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Command to run before the first frame, e.g. `set 0:40 0:20 x8`
    #[arg(trailing_var_arg = true)]
    command: Vec<String>,
}

fn parse_mode(name: &str) -> Result<Mode, String> {
    Mode::from_name(name).ok_or_else(|| format!("expected auto or manual, got {name}"))
}

/// Install the tracing subscriber. The terminal belongs to the UI, so
/// events only go to a file.
fn init_logging(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    let file = File::create(path)?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();

    Ok(())
}

/// Build the App and run the command line's command against it.
///
/// Returns `None` if that command asked to quit, so the terminal is
/// never taken over.
fn prepare(config: Config, command: &[String]) -> Result<Option<App>, CommandError> {
    let mut app = App::new(config);
    let actions = app.execute(&command.join(" "))?;
    if actions.contains(&AppAction::Quit) {
        tracing::info!("quit requested on the command line");
        return Ok(None);
    }
    Ok(Some(app))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(mode) = args.mode {
        config.default_mode = mode;
    }

    tracing::info!("workout timer starting");

    let Some(app) = prepare(config, &args.command)? else {
        return Ok(());
    };

    let driver = TerminalDriver::new(TICK_RATE)?;
    let mut runtime = Runtime::new(driver, app);
    Ok(runtime.run().await?)
}
