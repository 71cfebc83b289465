use anyhow::{anyhow, Result};

use rpawocheck::prohibited::ProhibitedSet;
use rpawocheck::scoring::StrengthLabel;
use rpawocheck::strengthen;

pub fn strengthen_password(password: &str, target: &str, count: usize) -> Result<()> {
    let target: StrengthLabel = target.parse().map_err(|e: String| anyhow!(e))?;
    let prohibited = ProhibitedSet::default_list();

    if count <= 1 {
        let result = strengthen::strengthen(password, target, &prohibited);
        println!("Strengthened password: {}", result.password);
        println!(
            "Password strength: {} (score: {:.2}/10)",
            result.label, result.score
        );
        if !result.reached_target {
            println!("Note: target band {} not reached within the attempt limit", target);
        }
        return Ok(());
    }

    let options = strengthen::strengthen_options(password, target, count, &prohibited)?;
    println!("Strengthened candidates:");
    for (i, option) in options.iter().enumerate() {
        println!("{}. {}", i + 1, option);
    }
    Ok(())
}
