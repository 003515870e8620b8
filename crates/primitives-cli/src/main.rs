//! `primitives` CLI — number literals, base conversion and `typeof` from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Print the full demonstration (also the default with no subcommand)
//! primitives demo
//!
//! # Integer → digits
//! primitives format 1024 --radix 2
//!
//! # Digits → integer (lenient: stops at the first non-digit)
//! primitives parse CAFE -r 16
//!
//! # Evaluate a numeric literal
//! primitives literal 6.62607004e-34
//!
//! # Classify a JSON value, `undefined`, or (with --date) an RFC 3339 timestamp
//! primitives typeof null
//! primitives typeof --precise '[1,2]'
//! primitives typeof --date 2026-02-17T14:00:00Z
//! ```
//!
//! Log output goes to stderr and is controlled by `RUST_LOG` or `--verbose`.

mod demo;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use primitives_core::{classify, classify_precise, Value};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "primitives",
    version,
    about = "Number literals, base conversion and typeof classification"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the demonstration sequence
    Demo,
    /// Print an integer in base 2, 8, 10 or 16
    Format {
        #[arg(allow_hyphen_values = true)]
        value: i64,
        /// Target base
        #[arg(short, long, default_value_t = 10)]
        radix: u32,
    },
    /// Parse the leading digits of TEXT in base 2, 8, 10 or 16
    Parse {
        #[arg(allow_hyphen_values = true)]
        text: String,
        /// Source base
        #[arg(short, long, default_value_t = 10)]
        radix: u32,
    },
    /// Evaluate a numeric literal such as 0xCAFE, 0o100 or 2.99E8
    Literal {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Print the type tag of a value
    Typeof {
        /// JSON text, or the bare word `undefined`
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Treat VALUE as an RFC 3339 timestamp
        #[arg(long)]
        date: bool,
        /// Report null and arrays as `null` / `array` instead of `object`
        #[arg(long)]
        precise: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            for line in demo::lines().context("Failed to build demonstration")? {
                println!("{}", line);
            }
        }
        Commands::Format { value, radix } => {
            let digits = primitives_core::format(value, radix)
                .with_context(|| format!("Failed to format {} in base {}", value, radix))?;
            println!("{}", digits);
        }
        Commands::Parse { text, radix } => {
            let value = primitives_core::parse(&text, radix)
                .with_context(|| format!("Failed to parse {:?} in base {}", text, radix))?;
            println!("{}", value);
        }
        Commands::Literal { text } => {
            let lit = primitives_core::parse_literal(&text)
                .with_context(|| format!("Failed to evaluate literal {:?}", text))?;
            println!("{} ({})", lit, lit.kind);
        }
        Commands::Typeof {
            value,
            date,
            precise,
        } => {
            let value = read_value(&value, date)?;
            debug!(?value, "classifying");
            let tag = if precise {
                classify_precise(&value)
            } else {
                classify(&value)
            };
            println!("{}", tag);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build a `Value` from a command-line argument.
fn read_value(raw: &str, date: bool) -> Result<Value> {
    if date {
        let parsed = DateTime::parse_from_rfc3339(raw.trim())
            .with_context(|| format!("Invalid RFC 3339 timestamp: {}", raw))?;
        return Ok(Value::Date(parsed.with_timezone(&Utc)));
    }
    if raw.trim() == "undefined" {
        return Ok(Value::Undefined);
    }
    Value::from_json_str(raw).with_context(|| format!("Invalid JSON value: {}", raw))
}
