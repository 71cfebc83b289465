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
// Prohibited-password set: lowercase-normalized exact membership.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// Compile-time default list built from data/prohibited.txt
include!(concat!(env!("OUT_DIR"), "/prohibited_data.rs"));

/// A set of disallowed passwords. Entries are trimmed, lowercased and
/// non-empty; membership is exact after the same normalization. The engine
/// only ever reads it.
#[derive(Debug, Clone, Default)]
pub struct ProhibitedSet {
    entries: HashSet<String>,
}

fn normalize(candidate: &str) -> String {
    candidate.trim().to_lowercase()
}

impl ProhibitedSet {
    /// An empty set: everything is allowed.
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled-in default list of common passwords.
    pub fn default_list() -> Self {
        let mut set = Self::new();
        for entry in DEFAULT_PROHIBITED {
            set.insert(entry);
        }
        set
    }

    /// Reads a line-oriented list, one password per line. Blank lines are
    /// skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut set = Self::new();
        for line in reader.lines() {
            set.insert(&line?);
        }
        Ok(set)
    }

    /// Loads a list from a text file. A missing or unreadable file degrades
    /// to an empty set so scoring keeps working without it.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => match Self::from_reader(BufReader::new(file)) {
                Ok(set) => set,
                Err(e) => {
                    log::warn!("Failed to read prohibited list {}: {}", path.display(), e);
                    Self::new()
                }
            },
            Err(e) => {
                log::warn!("Prohibited list {} not loaded: {}", path.display(), e);
                Self::new()
            }
        }
    }

    /// Inserts one entry, normalized. Empty entries are ignored.
    pub fn insert(&mut self, entry: &str) {
        let entry = normalize(entry);
        if !entry.is_empty() {
            self.entries.insert(entry);
        }
    }

    /// Exact membership test after normalization.
    pub fn contains(&self, candidate: &str) -> bool {
        self.entries.contains(&normalize(candidate))
    }

    /// True when any prohibited entry occurs inside the candidate,
    /// case-insensitively. Used by the generator to reject candidates that
    /// merely contain a known-bad password.
    pub fn matches_within(&self, candidate: &str) -> bool {
        let lower = candidate.to_lowercase();
        self.entries.iter().any(|entry| lower.contains(entry.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
