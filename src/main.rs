// This file is part of daid, the AMOLED dynamic AID gamma calibrator
// Copyright (C) 2023 Pengutronix e.K.
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use log::info;
use serde::Serialize;

use daid::mtp::{self, to_hex as hex, Mtp};
use daid::panel::{DemoBus, Panel};
use daid::{compute_gamma_tables, Config, MTP_LEN};

/// Compute dynamic AID gamma tables for Samsung AMOLED panels
#[derive(Parser)]
#[command(name = "daid", version = env!("VERSION_STRING"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the gamma register payload of every brightness step
    Table {
        #[command(flatten)]
        input: Input,
        /// Print JSON instead of one hex row per line
        #[arg(long)]
        json: bool,
    },
    /// Show the commands a brightness change sends to the panel
    Brightness {
        /// Brightness level between 0 and 100
        level: u32,
        #[command(flatten)]
        input: Input,
    },
    /// Print the built-in panel model as YAML
    DumpModel,
}

#[derive(Args)]
struct Input {
    /// Panel model description (YAML), the built-in S6E3HA2 model otherwise
    #[arg(long)]
    model: Option<PathBuf>,
    /// Calibration data as hex
    #[arg(long, conflicts_with = "mtp_file")]
    mtp: Option<String>,
    /// File containing the calibration data, raw or as hex
    #[arg(long)]
    mtp_file: Option<PathBuf>,
}

impl Input {
    fn config(&self) -> Result<Config> {
        match &self.model {
            Some(path) => Config::from_file(path),
            None => Ok(Config::s6e3ha2()),
        }
    }

    /// Calibration data to use. An uncalibrated panel if none was given.
    fn mtp(&self) -> Result<Mtp> {
        match (&self.mtp, &self.mtp_file) {
            (Some(text), _) => mtp::parse_hex(text),
            (None, Some(path)) => mtp::read_file(path),
            (None, None) => {
                info!("No calibration data given. Assuming an uncalibrated panel");
                Ok([0; MTP_LEN])
            }
        }
    }
}

#[derive(Serialize)]
struct Step {
    step: usize,
    nits: i32,
    gamma: String,
}

fn print_table(input: &Input, json: bool) -> Result<()> {
    let config = input.config()?;
    let table = compute_gamma_tables(&config, &input.mtp()?)?;

    if json {
        let steps: Vec<Step> = table
            .iter()
            .zip(config.nits.iter())
            .enumerate()
            .map(|(step, (row, &nits))| Step {
                step,
                nits,
                gamma: hex(row),
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&steps)?);
    } else {
        for (row, nits) in table.iter().zip(config.nits.iter()) {
            println!("{:3}: {}", nits, hex(row));
        }
    }

    Ok(())
}

fn set_brightness(input: &Input, level: u32) -> Result<()> {
    let bus = DemoBus::new(input.mtp()?);
    let mut panel = Panel::new(bus, input.config()?)?;

    panel.bus_mut().clear();
    panel.set_brightness(level)?;

    println!("{} nits", panel.nits());
    for cmd in panel.bus().writes() {
        println!("{}", hex(cmd));
    }

    Ok(())
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Table { input, json } => print_table(input, *json),
        Commands::Brightness { level, input } => set_brightness(input, *level),
        Commands::DumpModel => {
            print!("{}", Config::s6e3ha2().to_yaml()?);
            Ok(())
        }
    }
}
