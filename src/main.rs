//  ____  ____     __        __    ____ _               _
// |  _ \|  _ \ __ \ \      / /__ / ___| |__   ___  ___| | __
// | |_) | |_) / _` \ \ /\ / / _ \ |   | '_ \ / _ \/ __| |/ /
// |  _ <|  __/ (_| |\ V  V / (_) | |__| | | |  __/ (__|   <
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|_| |_|\___|\___|_|\_\
//
// Author : Tom Kirby
// Date : 2026-08-25
// Version : 0.1.0
// License : MIT
//
// A password strength checker and generator written in Rust.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "rpawocheck")]
#[command(about = "A password strength checker and generator written in Rust", long_about = None)]
enum Cli {
    /// Check password strength against the prohibited list
    Check(CheckArgs),

    /// Generate a new random password
    Gen(GenArgs),

    /// Strengthen an existing password into a target band
    Strengthen(StrengthenArgs),
}

#[derive(Debug, Parser)]
struct CheckArgs {
    /// Password to check
    password: String,

    /// Path to an external prohibited-password list (one entry per line)
    #[arg(short, long)]
    prohibited: Option<PathBuf>,

    /// Show the per-category breakdown
    #[arg(short, long, default_value_t = false)]
    breakdown: bool,

    /// Emit the report as JSON
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Difficulty preset: easy, medium or hard
    #[arg(short, long, default_value = "medium")]
    mode: String,

    /// Override the preset length
    #[arg(short, long)]
    length: Option<usize>,

    /// Override the preset minimum composite score
    #[arg(short = 's', long)]
    min_score: Option<f64>,

    /// Override the attempt ceiling
    #[arg(short, long)]
    attempts: Option<usize>,
}

#[derive(Debug, Parser)]
struct StrengthenArgs {
    /// Password to strengthen
    password: String,

    /// Target strength band
    #[arg(short, long, default_value = "strong")]
    target: String,

    /// Number of distinct candidates to offer
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli {
        Cli::Check(args) => {
            commands::check::check_password(args.password, args.prohibited, args.breakdown, args.json)
        }
        Cli::Gen(args) => {
            commands::password_gen::generate_random(&args.mode, args.length, args.min_score, args.attempts)
        }
        Cli::Strengthen(args) => {
            commands::strengthen::strengthen_password(&args.password, &args.target, args.count)
        }
    }
}
