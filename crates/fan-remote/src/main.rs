//! Fan Remote entry point.
//!
//! Wires together the configuration file, the IR emitter backend, the signal
//! transmitter, and the console front end.
//!
//! # Usage
//!
//! ```text
//! fan-remote [OPTIONS] <COMMAND>
//!
//! Commands:
//!   send <COMMAND>        Transmit one catalog command (on, off, swing, timer, wind)
//!   press <BUTTON>...     Press buttons in order and print the resulting status
//!   interactive           Read button names from stdin until 'quit'
//!   list                  List catalog commands
//!   decode [COMMAND]      Show the header and pulses of a code (or --pronto "<hex>")
//!   info                  Show the emitter backend and its capabilities
//!   init-config           Write a default config file
//!
//! Options:
//!   --config  <PATH>             Config file [env: FAN_REMOTE_CONFIG]
//!   --backend <lirc|dry-run>     Override the emitter backend [env: FAN_REMOTE_BACKEND]
//!   --device  <PATH>             Override the LIRC device [env: FAN_REMOTE_DEVICE]
//! ```
//!
//! # Logging
//!
//! Logs go to stderr.  `RUST_LOG` wins over the config file's `log_level`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fan_core::{decode_pronto, Button, CommandCatalog, CARRIER_FREQUENCY_HZ};
use fan_remote::application::press_button::RemoteController;
use fan_remote::application::send_command::{IrEmitter, SignalTransmitter};
use fan_remote::infrastructure::console::{
    describe_outcome, render_status, run_interactive, StatusDto,
};
use fan_remote::infrastructure::ir_emitter;
use fan_remote::infrastructure::storage::config::{
    config_file_path, load_config_from, save_config_to, AppConfig, EmitterBackend,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Infrared fan remote.
#[derive(Debug, Parser)]
#[command(name = "fan-remote", about = "Control a fan through an IR blaster", version)]
struct Cli {
    /// Path to the TOML config file.
    ///
    /// Defaults to the platform config directory (e.g.
    /// `~/.config/fanremote/config.toml`).  A missing file means defaults.
    #[arg(long, global = true, env = "FAN_REMOTE_CONFIG")]
    config: Option<PathBuf>,

    /// IR emitter backend, overriding the config file.
    #[arg(long, global = true, value_enum, env = "FAN_REMOTE_BACKEND")]
    backend: Option<EmitterBackend>,

    /// LIRC device node, overriding the config file.
    #[arg(long, global = true, env = "FAN_REMOTE_DEVICE")]
    device: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Transmit one catalog command.
    Send {
        /// Command identifier (on, off, swing, timer, wind).
        command: String,
    },
    /// Press buttons in order, starting from the all-off state.
    Press {
        /// Buttons: off, speed, swing, timer, wind.
        #[arg(required = true)]
        buttons: Vec<Button>,
        /// Print the final status as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Read button names from stdin, one per line.
    Interactive,
    /// List catalog commands and their pulse counts.
    List,
    /// Decode a catalog command, or a raw Pronto code.
    Decode {
        /// Command identifier to decode.
        #[arg(required_unless_present = "pronto", conflicts_with = "pronto")]
        command: Option<String>,
        /// Raw Pronto hex string to decode instead of a catalog command.
        #[arg(long)]
        pronto: Option<String>,
        /// Print the decoded signal as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show the emitter backend and its capabilities.
    Info,
    /// Write a default config file to the config path.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    fn config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => config_file_path().context("no --config given and no platform config dir"),
        }
    }

    /// Loads the config file and applies CLI/env overrides.
    fn load_config(&self) -> anyhow::Result<AppConfig> {
        let path = self.config_path()?;
        let mut config = load_config_from(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?;
        if let Some(backend) = self.backend {
            config.emitter.backend = backend;
        }
        if let Some(device) = &self.device {
            config.emitter.device = device.clone();
        }
        Ok(config)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.remote.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::List => {
            list_commands(&CommandCatalog::builtin(), &mut io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Decode {
            ref command,
            ref pronto,
            json,
        } => decode(
            command.as_deref(),
            pronto.as_deref(),
            json,
            &mut io::stdout().lock(),
        ),
        Command::InitConfig { force } => init_config(&cli.config_path()?, &config, force),
        Command::Info => {
            let emitter = ir_emitter::from_config(&config.emitter)?;
            print_info(&config, emitter.as_ref(), &mut io::stdout().lock())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Send { ref command } => {
            let emitter = ir_emitter::from_config(&config.emitter)?;
            let transmitter = SignalTransmitter::new(emitter);
            match transmitter.send(command) {
                Ok(sent) => {
                    println!(
                        "sent '{}' ({} pulses @ {} Hz)",
                        sent.command, sent.pulse_count, sent.carrier_hz
                    );
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("not sent: {e}");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Press { ref buttons, json } => {
            let emitter = ir_emitter::from_config(&config.emitter)?;
            let mut controller = RemoteController::new(SignalTransmitter::new(emitter));
            let mut all_sent = true;
            for &button in buttons {
                let outcome = controller.press(button);
                all_sent &= outcome.is_sent();
                eprintln!("{}", describe_outcome(&outcome));
            }
            if json {
                let dto = StatusDto::from(controller.state());
                println!("{}", serde_json::to_string_pretty(&dto)?);
            } else {
                println!("{}", render_status(&controller.state()));
            }
            Ok(if all_sent {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Interactive => {
            let emitter = ir_emitter::from_config(&config.emitter)?;
            let mut controller = RemoteController::new(SignalTransmitter::new(emitter));
            info!("interactive remote ready");
            let stdin = io::stdin();
            run_interactive(&mut controller, stdin.lock(), io::stdout())
                .context("console I/O failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn list_commands(catalog: &CommandCatalog, out: &mut impl Write) -> anyhow::Result<()> {
    for (name, code) in catalog.iter() {
        let signal = decode_pronto(code).with_context(|| format!("catalog entry '{name}'"))?;
        writeln!(
            out,
            "{name:<6} {:>3} pulses  {:>7} us",
            signal.pulses.len(),
            signal.total_duration_us()
        )?;
    }
    Ok(())
}

fn decode(
    command: Option<&str>,
    pronto: Option<&str>,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<ExitCode> {
    let catalog = CommandCatalog::builtin();
    let code = match (command, pronto) {
        (_, Some(raw)) => raw,
        (Some(name), None) => match catalog.get(name) {
            Some(code) => code,
            None => {
                eprintln!("unknown command: {name}");
                return Ok(ExitCode::FAILURE);
            }
        },
        (None, None) => anyhow::bail!("either a command or --pronto is required"),
    };

    let signal = decode_pronto(code)?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&signal)?)?;
        return Ok(ExitCode::SUCCESS);
    }

    let header = signal.header;
    writeln!(
        out,
        "format 0x{:04X}  frequency code 0x{:04X}  once pairs {}  repeat pairs {}",
        header.format, header.frequency_code, header.once_pairs, header.repeat_pairs
    )?;
    match header.declared_carrier_hz() {
        Some(hz) => writeln!(
            out,
            "declared carrier {hz} Hz (transmitted at {CARRIER_FREQUENCY_HZ} Hz)"
        )?,
        None => writeln!(
            out,
            "no declared carrier (transmitted at {CARRIER_FREQUENCY_HZ} Hz)"
        )?,
    }
    writeln!(
        out,
        "{} pulses, {} us total",
        signal.pulses.len(),
        signal.total_duration_us()
    )?;
    for pair in signal.pulses.chunks(2) {
        match pair {
            [mark, space] => writeln!(out, "  +{mark} -{space}")?,
            [mark] => writeln!(out, "  +{mark}")?,
            _ => {}
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_info(config: &AppConfig, emitter: &dyn IrEmitter, out: &mut impl Write) -> io::Result<()> {
    match config.emitter.backend {
        EmitterBackend::Lirc => writeln!(
            out,
            "backend: lirc ({})",
            config.emitter.device.display()
        )?,
        EmitterBackend::DryRun => writeln!(out, "backend: dry-run")?,
    }
    writeln!(out, "IR emitter present: {}", emitter.has_ir_emitter())?;
    match emitter.carrier_frequencies() {
        Some(ranges) if !ranges.is_empty() => {
            for range in ranges {
                let marker = if range.contains(CARRIER_FREQUENCY_HZ) {
                    " (covers 38 kHz)"
                } else {
                    ""
                };
                writeln!(out, "carrier range: {range}{marker}")?;
            }
        }
        _ => writeln!(out, "carrier ranges: not reported")?,
    }
    Ok(())
}

fn init_config(path: &Path, config: &AppConfig, force: bool) -> anyhow::Result<ExitCode> {
    if path.exists() && !force {
        eprintln!(
            "{} already exists; pass --force to overwrite",
            path.display()
        );
        return Ok(ExitCode::FAILURE);
    }
    save_config_to(path, config)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(ExitCode::SUCCESS)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
