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
// Additive strengthening of an existing password toward a target band.

use std::collections::HashSet;

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::passgen::{DIGITS, LOWERCASE, SPECIAL, UPPERCASE};
use crate::prohibited::ProhibitedSet;
use crate::scoring::{self, StrengthLabel, StrengthReport};

/// Hard ceiling on augmentation rounds for one password.
pub const MAX_ATTEMPTS: usize = 100;

/// How many strengthening runs to spend per requested distinct option.
const TRIES_PER_OPTION: usize = 20;

#[derive(Debug, Error)]
pub enum StrengthenError {
    #[error("could not collect {requested} distinct candidates after {attempts} attempts ({found} found)")]
    Exhausted {
        requested: usize,
        found: usize,
        attempts: usize,
    },
}

/// Result of a strengthening run. The password always begins with the
/// original characters in their original order; `reached_target` is false
/// when the attempt ceiling ran out first (best-effort result).
#[derive(Debug, Clone, PartialEq)]
pub struct Strengthened {
    pub password: String,
    pub score: f64,
    pub label: StrengthLabel,
    pub reached_target: bool,
}

/// Length floor a password should meet before it can plausibly sit in the
/// given band.
pub fn min_length_for(target: StrengthLabel) -> usize {
    match target {
        StrengthLabel::VeryWeak => 0,
        StrengthLabel::Weak => 6,
        StrengthLabel::Moderate => 8,
        StrengthLabel::Strong => 12,
        StrengthLabel::VeryStrong => 16,
    }
}

fn pick<R: Rng>(alphabet: &str, rng: &mut R) -> char {
    let chars: Vec<char> = alphabet.chars().collect();
    *chars.choose(rng).unwrap()
}

fn full_pool() -> String {
    let mut pool = String::new();
    pool.push_str(LOWERCASE);
    pool.push_str(UPPERCASE);
    pool.push_str(DIGITS);
    pool.push_str(SPECIAL);
    pool
}

// One append-only repair step: missing class first, then the length floor,
// then diluting a banned substring, otherwise a generic append.
fn augment<R: Rng>(
    current: &mut String,
    target: StrengthLabel,
    prohibited: &ProhibitedSet,
    rng: &mut R,
) {
    let mut missing = Vec::new();
    if !current.chars().any(|c| c.is_lowercase()) {
        missing.push(LOWERCASE);
    }
    if !current.chars().any(|c| c.is_uppercase()) {
        missing.push(UPPERCASE);
    }
    if !current.chars().any(|c| c.is_numeric()) {
        missing.push(DIGITS);
    }
    if !current.chars().any(|c| !c.is_alphanumeric()) {
        missing.push(SPECIAL);
    }
    if let Some(alphabet) = missing.choose(rng) {
        current.push(pick(alphabet, rng));
        return;
    }

    let floor = min_length_for(target);
    if current.chars().count() < floor {
        let pool = full_pool();
        while current.chars().count() < floor {
            current.push(pick(&pool, rng));
        }
        return;
    }

    if scoring::contains_banned_pattern(current) || prohibited.contains(current) {
        current.push(pick(SPECIAL, rng));
        return;
    }

    current.push(pick(&full_pool(), rng));
}

/// Strengthens a password into the target band, appending characters only.
/// The original characters are never removed or reordered. Soft guarantee:
/// after the attempt ceiling the best-scoring candidate seen is returned
/// even if it sits outside the band.
pub fn strengthen(
    password: &str,
    target: StrengthLabel,
    prohibited: &ProhibitedSet,
) -> Strengthened {
    let mut rng = OsRng;
    strengthen_with_rng(password, target, prohibited, &mut rng)
}

pub fn strengthen_with_rng<R: Rng>(
    password: &str,
    target: StrengthLabel,
    prohibited: &ProhibitedSet,
    rng: &mut R,
) -> Strengthened {
    strengthen_inner(password, target, prohibited, rng, false)
}

fn strengthen_inner<R: Rng>(
    password: &str,
    target: StrengthLabel,
    prohibited: &ProhibitedSet,
    rng: &mut R,
    force_augment: bool,
) -> Strengthened {
    let mut current = password.to_string();
    if force_augment {
        augment(&mut current, target, prohibited, rng);
    }

    let mut best = (current.clone(), 0.0_f64, StrengthLabel::VeryWeak);

    for attempt in 1..=MAX_ATTEMPTS {
        if let StrengthReport::Scored { score, label, .. } =
            scoring::assess_password(&current, prohibited)
        {
            if label >= target {
                log::debug!("target band reached on attempt {} (score {:.2})", attempt, score);
                return Strengthened {
                    password: current,
                    score,
                    label,
                    reached_target: true,
                };
            }
            if score > best.1 {
                best = (current.clone(), score, label);
            }
        }
        augment(&mut current, target, prohibited, rng);
    }

    let (password, score, label) = best;
    Strengthened {
        password,
        score,
        label,
        reached_target: false,
    }
}

/// Produces `count` pairwise-distinct strengthened variants for the user to
/// choose from. Each is a strict superstring extension of the input. Bounded:
/// fails once the try budget runs out before enough distinct outputs exist.
pub fn strengthen_options(
    password: &str,
    target: StrengthLabel,
    count: usize,
    prohibited: &ProhibitedSet,
) -> Result<Vec<String>, StrengthenError> {
    let mut rng = OsRng;
    strengthen_options_with_rng(password, target, count, prohibited, &mut rng)
}

pub fn strengthen_options_with_rng<R: Rng>(
    password: &str,
    target: StrengthLabel,
    count: usize,
    prohibited: &ProhibitedSet,
    rng: &mut R,
) -> Result<Vec<String>, StrengthenError> {
    let budget = count.saturating_mul(TRIES_PER_OPTION).max(1);
    let mut seen = HashSet::new();
    let mut options = Vec::new();

    for _ in 0..budget {
        if options.len() == count {
            break;
        }
        // Force at least one append so every option is a strict extension
        let candidate = strengthen_inner(password, target, prohibited, rng, true);
        if seen.insert(candidate.password.clone()) {
            options.push(candidate.password);
        }
    }

    if options.len() < count {
        return Err(StrengthenError::Exhausted {
            requested: count,
            found: options.len(),
            attempts: budget,
        });
    }
    Ok(options)
}
