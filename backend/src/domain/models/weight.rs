//! Kilogram/gram weight value.
//!
//! A `Weight` is always at least 1 kg with grams in 0..=999. Every
//! constructor and `add` falls back instead of failing.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

const GRAMS_PER_KILO: i64 = 1000;

const MIN_KILOS: i32 = 1;
const MIN_GRAMS: i32 = 0;
const MAX_GRAMS: i32 = 999;

const DEFAULT_KILOS: i32 = 1;
const DEFAULT_GRAMS: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WeightParts")]
pub struct Weight {
    kilos: i32,
    grams: i32,
}

#[derive(Deserialize)]
struct WeightParts {
    kilos: i32,
    grams: i32,
}

impl From<WeightParts> for Weight {
    fn from(parts: WeightParts) -> Self {
        Weight::new(parts.kilos, parts.grams)
    }
}

impl Weight {
    /// Create a weight, falling back to 1 kg when the pair is invalid
    pub fn new(kilos: i32, grams: i32) -> Self {
        if Self::is_valid(kilos, grams) {
            Self { kilos, grams }
        } else {
            debug!("Invalid weight {} kg {} g, using fallback", kilos, grams);
            Self::default()
        }
    }

    /// Split a total gram count into kilos and grams, falling back to 1 kg
    /// when there is less than one whole kilo
    pub fn from_grams(total_grams: i64) -> Self {
        match Self::split(total_grams) {
            Some((kilos, grams)) if kilos >= MIN_KILOS => Self { kilos, grams },
            _ => {
                debug!("Invalid weight {} g, using fallback", total_grams);
                Self::default()
            }
        }
    }

    pub fn kilos(&self) -> i32 {
        self.kilos
    }

    pub fn grams(&self) -> i32 {
        self.grams
    }

    pub fn to_grams(&self) -> i64 {
        self.grams as i64 + self.kilos as i64 * GRAMS_PER_KILO
    }

    pub fn lighter(&self, other: &Weight) -> bool {
        self.to_grams() < other.to_grams()
    }

    pub fn heavier(&self, other: &Weight) -> bool {
        other.lighter(self)
    }

    pub fn equals(&self, other: &Weight) -> bool {
        self.to_grams() == other.to_grams()
    }

    /// Add (or with a negative value, remove) grams.
    ///
    /// Returns an unchanged copy when the result is not a valid weight.
    pub fn add(&self, grams: i32) -> Weight {
        let split = self
            .to_grams()
            .checked_add(grams as i64)
            .and_then(Self::split);

        match split {
            Some((kilos, grams)) if Self::is_valid(kilos, grams) => Self { kilos, grams },
            _ => {
                debug!("Adding {} g to {} kg is invalid, keeping original", grams, self);
                *self
            }
        }
    }

    fn is_valid(kilos: i32, grams: i32) -> bool {
        kilos >= MIN_KILOS && (MIN_GRAMS..=MAX_GRAMS).contains(&grams)
    }

    /// Truncating split, None when the kilos do not fit
    fn split(total_grams: i64) -> Option<(i32, i32)> {
        let kilos = i32::try_from(total_grams / GRAMS_PER_KILO).ok()?;
        let grams = (total_grams % GRAMS_PER_KILO) as i32;
        Some((kilos, grams))
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self {
            kilos: DEFAULT_KILOS,
            grams: DEFAULT_GRAMS,
        }
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_grams().cmp(&other.to_grams())
    }
}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Decimal kilograms: 3 kg 200 g renders as "3.2", 3 kg as "3.0"
impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fraction = format!("{:03}", self.grams);
        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            write!(f, "{}.0", self.kilos)
        } else {
            write!(f, "{}.{}", self.kilos, fraction)
        }
    }
}
