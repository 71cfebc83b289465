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
// Password strength scoring and constrained generation engine.

pub mod passgen;
pub mod prohibited;
pub mod scoring;
pub mod strengthen;

pub use passgen::{GenerateError, GenerationConstraint, Mode};
pub use prohibited::ProhibitedSet;
pub use scoring::{CategoryScores, ScoringOptions, StrengthLabel, StrengthReport};
pub use strengthen::{StrengthenError, Strengthened};
