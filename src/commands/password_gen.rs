use anyhow::{anyhow, Result};

use rpawocheck::passgen::{self, Mode};
use rpawocheck::prohibited::ProhibitedSet;

pub fn generate_random(
    mode: &str,
    length: Option<usize>,
    min_score: Option<f64>,
    attempts: Option<usize>,
) -> Result<()> {
    let mode: Mode = mode.parse().map_err(|e: String| anyhow!(e))?;
    let mut constraint = mode.constraint();
    if let Some(length) = length {
        constraint.length = length;
    }
    if let Some(min_score) = min_score {
        constraint.min_score = min_score;
    }
    if let Some(attempts) = attempts {
        constraint.max_attempts = attempts;
    }

    let prohibited = ProhibitedSet::default_list();
    let password = passgen::generate(&constraint, &prohibited)?;
    println!("Generated password: {}", password);
    super::display_strength(&password, &prohibited);
    Ok(())
}
