use std::fs::File;
use std::io::{stdout, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::StatusService;
use crate::domain::{ExpiryUnit, Sats, Units, EXPIRY_THRESHOLD};
use crate::io::{write_balance_csv, write_garden_csv, write_json, write_user_csv};

/// Vigilo - Session & Balance Status
#[derive(Parser)]
#[command(name = "vigilo")]
#[command(about = "A session and balance status checker built on immutable records")]
#[command(version)]
pub struct Cli {
    /// Expiry threshold, in the same unit as the record being checked
    #[arg(long, global = true, default_value_t = EXPIRY_THRESHOLD)]
    pub threshold: Units,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a user's session status
    Status {
        /// User address
        address: String,

        /// Remaining validity
        expiry: Units,

        /// Unit the expiry is expressed in: seconds, minutes
        #[arg(short, long, default_value = "seconds")]
        unit: String,

        /// Output format: text, json, csv
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check an account balance summary
    Balance {
        /// Confirmed funds, in satoshis
        confirmed: Sats,

        /// Unconfirmed funds, in satoshis
        unconfirmed: Sats,

        /// Expected total; must equal confirmed + unconfirmed
        total: Sats,

        /// Output format: text, json, csv
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show a garden entry with its cached session status
    Garden {
        /// Garden name
        name: String,

        /// Garden age in years
        age: u32,

        /// User address the status is derived from
        #[arg(long)]
        address: String,

        /// Remaining validity of the user's session
        #[arg(long)]
        expiry: Units,

        /// Unit the expiry is expressed in: seconds, minutes
        #[arg(short, long, default_value = "seconds")]
        unit: String,

        /// Output format: text, json, csv
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let service = StatusService::with_threshold(self.threshold);

        match self.command {
            Commands::Status {
                address,
                expiry,
                unit,
                format,
                output,
            } => {
                let unit = parse_unit(&unit)?;
                let report = service.check_user(&address, expiry, unit)?;
                let mut writer = open_output(output.as_deref())?;

                match format.as_str() {
                    "json" => write_json(&mut writer, &report)?,
                    "csv" => write_user_csv(&mut writer, &report)?,
                    _ => {
                        writeln!(writer, "{}", report.user)?;
                        writeln!(
                            writer,
                            "Status: {} ({})",
                            report.status,
                            report.status.message()
                        )?;
                    }
                }
            }

            Commands::Balance {
                confirmed,
                unconfirmed,
                total,
                format,
                output,
            } => {
                let balance = service.check_balance(confirmed, unconfirmed, total)?;
                let mut writer = open_output(output.as_deref())?;

                match format.as_str() {
                    "json" => write_json(&mut writer, &balance)?,
                    "csv" => write_balance_csv(&mut writer, &balance)?,
                    _ => writeln!(writer, "{}", balance)?,
                }
            }

            Commands::Garden {
                name,
                age,
                address,
                expiry,
                unit,
                format,
                output,
            } => {
                let unit = parse_unit(&unit)?;
                let garden = service.build_garden(&name, age, &address, expiry, unit)?;
                let mut writer = open_output(output.as_deref())?;

                match format.as_str() {
                    "json" => write_json(&mut writer, &garden)?,
                    "csv" => write_garden_csv(&mut writer, &garden)?,
                    _ => writeln!(writer, "{}", garden)?,
                }
            }
        }

        Ok(())
    }
}

fn parse_unit(unit: &str) -> Result<ExpiryUnit> {
    ExpiryUnit::from_str(unit)
        .with_context(|| format!("Invalid unit '{}'. Valid units: seconds, minutes", unit))
}

fn open_output(output: Option<&str>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(stdout())),
    }
}
