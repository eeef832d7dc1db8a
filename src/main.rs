use anyhow::Context;
use clap::Parser;
use keycalc::config::Config;
use keycalc::input::parse_keys;
use keycalc::logging;
use keycalc::ui::{Session, render_display, render_json};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "keycalc", version, about = "A keyboard-driven four-function calculator")]
struct Cli {
    /// Path to the config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Run these keys, print the final display and exit
    #[arg(short, long)]
    keys: Option<String>,

    /// Print the final display as JSON (with --keys)
    #[arg(long, requires = "keys")]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    logging::init(level);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting keycalc");

    match cli.keys {
        Some(keys) => run_once(&config, &keys, cli.json),
        None => {
            let stdin = io::stdin();
            let mut session = Session::new(config.display, stdin.lock(), io::stdout());
            session.run().context("Terminal session failed")
        }
    }
}

/// Run a key sequence without blocking on warnings and print the result.
fn run_once(config: &Config, keys: &str, json: bool) -> anyhow::Result<()> {
    let mut session = Session::new(config.display.clone(), io::empty(), io::stderr())
        .with_interactive(false);
    session
        .press_all(parse_keys(keys))
        .context("Failed to run keys")?;

    let display = session.state().display();
    let mut stdout = io::stdout().lock();
    if json {
        writeln!(stdout, "{}", render_json(&display)?)?;
    } else {
        stdout.write_all(render_display(&display, config.display.width).as_bytes())?;
    }

    Ok(())
}
