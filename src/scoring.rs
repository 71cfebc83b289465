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
// Category scorers and the weighted aggregator.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::prohibited::ProhibitedSet;

/// Scoring weights, as fractions of 1.0. Tests assert the sum.
pub const WEIGHT_LENGTH: f64 = 0.25;
pub const WEIGHT_VARIETY: f64 = 0.20;
pub const WEIGHT_ENTROPY: f64 = 0.25;
pub const WEIGHT_PATTERN: f64 = 0.15;
pub const WEIGHT_COMMON: f64 = 0.15;

/// Every category score lives in [0, MAX_SCORE], as does the composite.
pub const MAX_SCORE: f64 = 10.0;

/// Known weak substrings: numeric runs, alphabetic runs, keyboard runs and
/// a few dictionary words. Matched case-insensitively.
pub const COMMON_PATTERNS: &[&str] = &[
    "123", "1234", "2345", "3456", "4567", "5678", "6789",
    "abcd", "bcde", "cdef", "qwerty", "asdf", "zxcv",
    "password", "letmein", "admin", "iloveyou", "welcome",
];

/// Optional scoring policies that were applied inconsistently across
/// revisions of the checker. All default to off.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringOptions {
    /// Penalize short passwords drawn from a single character class.
    pub single_class_penalty: bool,
}

/// Per-category breakdown of a graded password.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub length: f64,
    pub variety: f64,
    pub entropy: f64,
    pub pattern: f64,
    pub common: f64,
}

impl CategoryScores {
    /// Weighted sum, clamped to [0, MAX_SCORE].
    pub fn composite(&self) -> f64 {
        let total = self.length * WEIGHT_LENGTH
            + self.variety * WEIGHT_VARIETY
            + self.entropy * WEIGHT_ENTROPY
            + self.pattern * WEIGHT_PATTERN
            + self.common * WEIGHT_COMMON;
        total.clamp(0.0, MAX_SCORE)
    }
}

/// Discrete strength bands, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Moderate => "Moderate",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for StrengthLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "veryweak" => Ok(StrengthLabel::VeryWeak),
            "weak" => Ok(StrengthLabel::Weak),
            "moderate" => Ok(StrengthLabel::Moderate),
            "strong" => Ok(StrengthLabel::Strong),
            "verystrong" => Ok(StrengthLabel::VeryStrong),
            _ => Err(format!(
                "Unknown strength band '{}' (expected very-weak, weak, moderate, strong or very-strong)",
                s
            )),
        }
    }
}

/// Outcome of assessing a password. Empty and prohibited inputs bypass
/// aggregation entirely: they are distinguished results, not low grades.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StrengthReport {
    Empty,
    Prohibited,
    Scored {
        score: f64,
        label: StrengthLabel,
        breakdown: CategoryScores,
    },
}

/// Length sub-score: rewards length in steps up to a cap at 14 characters,
/// flat past it. Counts grapheme clusters so combining sequences are one
/// character. Empty scores 0.
pub fn length_score(password: &str) -> f64 {
    match password.graphemes(true).count() {
        0 => 0.0,
        1..=4 => 2.0,
        5..=7 => 4.0,
        8..=10 => 6.0,
        11..=14 => 8.0,
        _ => 10.0,
    }
}

fn class_presence(password: &str) -> (bool, bool, bool, bool) {
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_numeric());
    let has_symbol = password.chars().any(|c| !c.is_alphanumeric());
    (has_lower, has_upper, has_digit, has_symbol)
}

/// Number of distinct character classes present (0..=4).
pub fn char_classes(password: &str) -> usize {
    let (lower, upper, digit, symbol) = class_presence(password);
    [lower, upper, digit, symbol].iter().filter(|&&p| p).count()
}

/// Variety sub-score: steps on the count of character classes used.
pub fn variety_score(password: &str) -> f64 {
    variety_score_with(password, &ScoringOptions::default())
}

pub fn variety_score_with(password: &str, options: &ScoringOptions) -> f64 {
    let types_used = char_classes(password);
    let score = match types_used {
        1 => 2.0,
        2 => 5.0,
        3 => 8.0,
        4 => 10.0,
        _ => 0.0,
    };
    if options.single_class_penalty && types_used == 1 && password.graphemes(true).count() < 8 {
        return 1.0;
    }
    score
}

/// Raw entropy estimate in bits: length times log2 of the alphabet estimate.
/// The alphabet is a sum of flat per-class bonuses (26/26/10/33) for the
/// classes actually present. Empty alphabet yields 0, never log(0).
pub fn entropy_bits(password: &str) -> f64 {
    let (lower, upper, digit, symbol) = class_presence(password);

    let mut alphabet = 0u32;
    if lower {
        alphabet += 26;
    }
    if upper {
        alphabet += 26;
    }
    if digit {
        alphabet += 10;
    }
    if symbol {
        alphabet += 33;
    }

    let length = password.graphemes(true).count();
    if alphabet == 0 || length == 0 {
        return 0.0;
    }

    length as f64 * f64::from(alphabet).log2()
}

/// Entropy sub-score: raw bits scaled by a fixed divisor and capped, so
/// 100 bits or more earns the maximum.
pub fn entropy_score(password: &str) -> f64 {
    (entropy_bits(password) / 10.0).min(MAX_SCORE)
}

/// True when any known weak substring occurs in the password,
/// case-insensitively.
pub fn contains_banned_pattern(password: &str) -> bool {
    let lower = password.to_lowercase();
    COMMON_PATTERNS.iter().any(|pat| lower.contains(pat))
}

/// Repetition/pattern sub-score: the minimum of a repetition check (ratio of
/// the most frequent character over total length, mapped through descending
/// bands) and a pattern check (any banned substring drops to a fixed low
/// score). Weakest link wins. Empty scores 0.
pub fn repetition_and_pattern_score(password: &str) -> f64 {
    if password.is_empty() {
        return 0.0;
    }

    let lower = password.to_lowercase();

    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in lower.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    let most_common = counts.values().copied().max().unwrap_or(0);
    let length = lower.chars().count();
    let repetition_ratio = most_common as f64 / length as f64;

    let rep_score: f64 = if repetition_ratio >= 0.6 {
        2.0
    } else if repetition_ratio >= 0.4 {
        4.0
    } else if repetition_ratio >= 0.3 {
        6.0
    } else if repetition_ratio >= 0.2 {
        8.0
    } else {
        10.0
    };

    let pat_score = if contains_banned_pattern(password) {
        3.0
    } else {
        10.0
    };

    rep_score.min(pat_score)
}

/// Prohibited-membership sub-score: 0 when the normalized password is in the
/// set, else the maximum. Kept as a breakdown category even though callers
/// short-circuit membership to a rejection.
pub fn common_password_score(password: &str, prohibited: &ProhibitedSet) -> f64 {
    if prohibited.contains(password) {
        0.0
    } else {
        MAX_SCORE
    }
}

/// Maps a composite score to its band. Bands are inclusive-low,
/// exclusive-high; the top value closes the last band.
pub fn label_for(score: f64) -> StrengthLabel {
    if score < 2.0 {
        StrengthLabel::VeryWeak
    } else if score < 4.0 {
        StrengthLabel::Weak
    } else if score < 6.0 {
        StrengthLabel::Moderate
    } else if score < 8.0 {
        StrengthLabel::Strong
    } else {
        StrengthLabel::VeryStrong
    }
}

/// Assesses a password against the prohibited set with default options.
pub fn assess_password(password: &str, prohibited: &ProhibitedSet) -> StrengthReport {
    assess_password_with(password, prohibited, &ScoringOptions::default())
}

/// Full assessment: empty and prohibited inputs bypass aggregation, anything
/// else gets the weighted composite of the category scorers.
pub fn assess_password_with(
    password: &str,
    prohibited: &ProhibitedSet,
    options: &ScoringOptions,
) -> StrengthReport {
    if password.is_empty() {
        return StrengthReport::Empty;
    }
    if prohibited.contains(password) {
        return StrengthReport::Prohibited;
    }

    let breakdown = CategoryScores {
        length: length_score(password),
        variety: variety_score_with(password, options),
        entropy: entropy_score(password),
        pattern: repetition_and_pattern_score(password),
        common: common_password_score(password, prohibited),
    };

    let score = (breakdown.composite() * 100.0).round() / 100.0;
    StrengthReport::Scored {
        score,
        label: label_for(score),
        breakdown,
    }
}
