//! Command-line keyer: reads a message and keys it as Morse code on a
//! GPIO pin.
//!
//! # Usage
//!
//! ```sh
//! gpio-morse --pin 12 --wpm 15 hello world
//! echo "cq cq" | gpio-morse --dry-run
//! ```
//!
//! Without the `rpi` feature, or with `--dry-run`, transitions are only
//! logged (`RUST_LOG=trace` to see them).

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gpio_morse::hal::{SharedLine, TokioDelay, TraceLine};
use gpio_morse::{
    render, CancelSignal, Config, LineConfig, Outcome, OutputLine, ShutdownCoordinator,
    TimingConfig, Transmitter,
};

#[derive(Debug, Parser)]
#[command(name = "gpio-morse")]
#[command(about = "Key a message as Morse code on a GPIO output pin")]
struct Cli {
    /// GPIO pin to key (BCM numbering).
    #[arg(long, default_value_t = 12)]
    pin: u8,

    /// Length of one time unit (a dot) in milliseconds.
    #[arg(long, conflicts_with = "wpm")]
    unit_ms: Option<u32>,

    /// Keying speed in words per minute (PARIS).
    #[arg(long)]
    wpm: Option<u32>,

    /// Gap between the dots and dashes of one character, in units.
    #[arg(long, default_value_t = 1)]
    intra_gap_units: u32,

    /// Log line transitions instead of driving the pin.
    #[arg(long)]
    dry_run: bool,

    /// Message to send. Prompts on stdin when omitted.
    message: Vec<String>,
}

impl Cli {
    fn config(&self) -> Config {
        let mut timing = TimingConfig::default().with_intra_gap_units(self.intra_gap_units);
        if let Some(ms) = self.unit_ms {
            timing = timing.with_unit_ms(ms);
        }
        if let Some(wpm) = self.wpm {
            timing = timing.with_wpm(wpm);
        }
        Config::default()
            .with_line(LineConfig::default().with_pin(self.pin))
            .with_timing(timing)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.config();

    info!(
        device = config.device.name.as_str(),
        pin = config.line.pin,
        unit_ms = config.timing.unit_ms,
        "starting"
    );

    #[cfg(feature = "rpi")]
    {
        if !cli.dry_run {
            let line = gpio_morse::hal::RpiLine::open(config.line.pin)
                .context("output line unavailable, refusing to transmit")?;
            let message = read_message(&cli.message)?;
            return key(line, &config, &message).await;
        }
    }

    if cli.dry_run || cfg!(not(feature = "rpi")) {
        info!("dry run, line transitions are logged only");
    }
    let message = read_message(&cli.message)?;
    key(TraceLine::new(config.line.pin), &config, &message).await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Message from the arguments, or one line from stdin. Lowercased.
fn read_message(args: &[String]) -> Result<String> {
    if !args.is_empty() {
        return Ok(join_args(args));
    }

    print!("Please enter a message: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read message from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_lowercase())
}

fn join_args(args: &[String]) -> String {
    args.join(" ").to_lowercase()
}

async fn key<L>(line: L, config: &Config, message: &str) -> Result<()>
where
    L: OutputLine + Send + 'static,
{
    println!("{message}");
    // Unsupported characters are reported by the transmission itself
    if let Ok(text) = render(message) {
        println!("{text}");
    }

    let line = SharedLine::new(line);
    let cancel = CancelSignal::new();
    let supervisor = ShutdownCoordinator::new(cancel.clone(), line.clone()).spawn_on_ctrl_c();

    let mut keyer = Transmitter::new(line, TokioDelay::new(), config.timing.to_timing());
    let result = keyer.transmit(message, &cancel).await;
    supervisor.abort();

    match result.context("transmission aborted")? {
        Outcome::Completed => info!("message sent"),
        Outcome::Cancelled => info!("stopped by interrupt"),
    }
    Ok(())
}
