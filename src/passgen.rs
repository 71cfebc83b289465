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
// Constrained random password generation.

use std::str::FromStr;

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::prohibited::ProhibitedSet;
use crate::scoring::{self, StrengthReport};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?~";

/// Hard ceiling on the randomized search. Exhausting it is a Failure, never
/// an unbounded retry.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid constraint: {0}")]
    InvalidConstraint(String),

    #[error("no password met the constraint after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// Constraints for one generation run. A character class is enabled when its
/// minimum count is at least 1; filler characters are drawn from the union
/// of enabled class alphabets.
#[derive(Debug, Clone)]
pub struct GenerationConstraint {
    pub length: usize,
    pub min_lowercase: usize,
    pub min_uppercase: usize,
    pub min_digits: usize,
    pub min_symbols: usize,
    pub min_types: usize,
    pub min_score: f64,
    pub max_attempts: usize,
}

impl Default for GenerationConstraint {
    fn default() -> Self {
        Mode::Medium.constraint()
    }
}

/// Difficulty presets. These are data over one parameterized algorithm, not
/// separate code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Easy,
    Medium,
    Hard,
}

impl Mode {
    pub fn constraint(self) -> GenerationConstraint {
        match self {
            Mode::Easy => GenerationConstraint {
                length: 8,
                min_lowercase: 1,
                min_uppercase: 0,
                min_digits: 1,
                min_symbols: 0,
                min_types: 2,
                min_score: 4.0,
                max_attempts: DEFAULT_MAX_ATTEMPTS,
            },
            Mode::Medium => GenerationConstraint {
                length: 12,
                min_lowercase: 1,
                min_uppercase: 1,
                min_digits: 1,
                min_symbols: 0,
                min_types: 3,
                min_score: 6.0,
                max_attempts: DEFAULT_MAX_ATTEMPTS,
            },
            Mode::Hard => GenerationConstraint {
                length: 16,
                min_lowercase: 1,
                min_uppercase: 1,
                min_digits: 1,
                min_symbols: 1,
                min_types: 4,
                min_score: 8.0,
                max_attempts: DEFAULT_MAX_ATTEMPTS,
            },
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Mode::Easy),
            "medium" => Ok(Mode::Medium),
            "hard" => Ok(Mode::Hard),
            _ => Err(format!("Unknown mode '{}' (expected easy, medium or hard)", s)),
        }
    }
}

impl GenerationConstraint {
    fn enabled_classes(&self) -> Vec<(usize, Vec<char>)> {
        let mut classes = Vec::new();
        if self.min_lowercase > 0 {
            classes.push((self.min_lowercase, LOWERCASE.chars().collect()));
        }
        if self.min_uppercase > 0 {
            classes.push((self.min_uppercase, UPPERCASE.chars().collect()));
        }
        if self.min_digits > 0 {
            classes.push((self.min_digits, DIGITS.chars().collect()));
        }
        if self.min_symbols > 0 {
            classes.push((self.min_symbols, SPECIAL.chars().collect()));
        }
        classes
    }

    fn validate(&self) -> Result<(), GenerateError> {
        if self.length == 0 {
            return Err(GenerateError::InvalidConstraint(
                "length must be at least 1".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(GenerateError::InvalidConstraint(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        let classes = self.enabled_classes();
        if classes.is_empty() {
            return Err(GenerateError::InvalidConstraint(
                "at least one character class must have a nonzero minimum".to_string(),
            ));
        }
        let required: usize = classes.iter().map(|(min, _)| min).sum();
        if self.length < required {
            return Err(GenerateError::InvalidConstraint(format!(
                "length must be at least {} to satisfy the per-class minimums",
                required
            )));
        }
        if self.min_types > classes.len() {
            return Err(GenerateError::InvalidConstraint(format!(
                "min_types {} exceeds the {} enabled character classes",
                self.min_types,
                classes.len()
            )));
        }
        Ok(())
    }
}

/// Generates a password satisfying the constraint, or fails after the
/// attempt ceiling.
pub fn generate(
    constraint: &GenerationConstraint,
    prohibited: &ProhibitedSet,
) -> Result<String, GenerateError> {
    let mut rng = OsRng;
    generate_with_rng(constraint, prohibited, &mut rng)
}

/// Same search with a caller-supplied RNG, for deterministic tests.
pub fn generate_with_rng<R: Rng>(
    constraint: &GenerationConstraint,
    prohibited: &ProhibitedSet,
    rng: &mut R,
) -> Result<String, GenerateError> {
    constraint.validate()?;

    let classes = constraint.enabled_classes();
    let pool: Vec<char> = classes
        .iter()
        .flat_map(|(_, alphabet)| alphabet.iter().copied())
        .collect();

    for attempt in 1..=constraint.max_attempts {
        let mut chars = Vec::with_capacity(constraint.length);

        // One draw per required slot of each class
        for (min, alphabet) in &classes {
            for _ in 0..*min {
                chars.push(*alphabet.choose(rng).unwrap());
            }
        }

        // Fill remaining slots from the union of enabled alphabets
        while chars.len() < constraint.length {
            chars.push(*pool.choose(rng).unwrap());
        }

        // Shuffle so class positions are not predictable
        chars.shuffle(rng);
        let candidate: String = chars.into_iter().collect();

        if scoring::contains_banned_pattern(&candidate) || prohibited.matches_within(&candidate) {
            log::debug!("attempt {}: candidate contains a banned substring", attempt);
            continue;
        }
        if scoring::char_classes(&candidate) < constraint.min_types {
            log::debug!("attempt {}: class diversity below minimum", attempt);
            continue;
        }

        match scoring::assess_password(&candidate, prohibited) {
            StrengthReport::Scored { score, .. } if score >= constraint.min_score => {
                log::debug!("accepted candidate on attempt {} (score {:.2})", attempt, score);
                return Ok(candidate);
            }
            _ => {
                log::debug!("attempt {}: candidate below minimum score", attempt);
            }
        }
    }

    Err(GenerateError::Exhausted {
        attempts: constraint.max_attempts,
    })
}
