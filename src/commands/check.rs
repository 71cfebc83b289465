use std::path::PathBuf;

use anyhow::Result;

use rpawocheck::prohibited::ProhibitedSet;
use rpawocheck::scoring::{self, StrengthReport};

pub fn check_password(
    password: String,
    prohibited_path: Option<PathBuf>,
    breakdown: bool,
    json: bool,
) -> Result<()> {
    let set = match prohibited_path {
        Some(path) => ProhibitedSet::load(path),
        None => ProhibitedSet::default_list(),
    };
    let report = scoring::assess_password(&password, &set);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match report {
        StrengthReport::Empty => println!("Password is empty"),
        StrengthReport::Prohibited => {
            println!("This password is too common. Choose a different one.")
        }
        StrengthReport::Scored {
            score,
            label,
            breakdown: scores,
        } => {
            println!("Password strength: {} (score: {:.2}/10)", label, score);
            if breakdown {
                println!("  length  : {:>5.2}", scores.length);
                println!("  variety : {:>5.2}", scores.variety);
                println!("  entropy : {:>5.2}", scores.entropy);
                println!("  pattern : {:>5.2}", scores.pattern);
                println!("  common  : {:>5.2}", scores.common);
            }
        }
    }
    Ok(())
}
