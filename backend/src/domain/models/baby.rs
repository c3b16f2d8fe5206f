//! Domain model for a newborn.

use std::fmt;

use serde::Serialize;
use shared::WeightStatus;
use tracing::debug;

use super::date::Date;
use super::weight::Weight;
use crate::domain::growth_curve;

const ID_LENGTH: usize = 9;
pub const DEFAULT_ID: &str = "000000000";

/// A newborn with a fixed birth weight and a tracked current weight.
///
/// Equality compares names, id and date of birth only; weights are ignored.
#[derive(Debug, Clone, Serialize)]
pub struct Baby {
    first_name: String,
    last_name: String,
    id: String,
    date_of_birth: Date,
    birth_weight: Weight,
    current_weight: Weight,
}

impl Baby {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        id: impl Into<String>,
        day: i32,
        month: i32,
        year: i32,
        birth_weight_grams: i32,
    ) -> Self {
        let birth_weight = Weight::from_grams(birth_weight_grams as i64);
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            id: Self::sanitize_id(id.into()),
            date_of_birth: Date::new(day, month, year),
            birth_weight,
            current_weight: birth_weight,
        }
    }

    /// Ids must be exactly nine characters; anything else becomes "000000000"
    pub fn sanitize_id(id: String) -> String {
        if Self::is_valid_id(&id) {
            id
        } else {
            debug!("Rejected id {:?}, using {}", id, DEFAULT_ID);
            DEFAULT_ID.to_string()
        }
    }

    pub fn is_valid_id(id: &str) -> bool {
        id.chars().count() == ID_LENGTH
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date_of_birth(&self) -> Date {
        self.date_of_birth
    }

    pub fn birth_weight(&self) -> Weight {
        self.birth_weight
    }

    pub fn current_weight(&self) -> Weight {
        self.current_weight
    }

    /// Replace the current weight; weights under 1 kg are ignored
    pub fn set_current_weight(&mut self, weight: Weight) {
        if weight.kilos() >= 1 {
            self.current_weight = weight;
        } else {
            debug!("Rejected current weight {} for baby {}", weight, self.id);
        }
    }

    /// Add grams to the current weight, keeping it when the result is invalid
    pub fn update_current_weight(&mut self, grams: i32) {
        self.set_current_weight(self.current_weight.add(grams));
    }

    pub fn equals(&self, other: &Baby) -> bool {
        self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.date_of_birth == other.date_of_birth
            && self.id == other.id
    }

    /// Same family name, different first names and ids, born on the same day
    /// or one day apart
    pub fn are_twins(&self, other: &Baby) -> bool {
        let same_last_name = self.last_name == other.last_name;
        let different_first_name = self.first_name != other.first_name;
        let different_id = self.id != other.id;
        let born_together = self.date_of_birth == other.date_of_birth
            || self.date_of_birth == other.date_of_birth.tomorrow()
            || self.date_of_birth.tomorrow() == other.date_of_birth;

        same_last_name && different_first_name && different_id && born_together
    }

    pub fn heavier(&self, other: &Baby) -> bool {
        self.current_weight.heavier(&other.current_weight)
    }

    pub fn older(&self, other: &Baby) -> bool {
        self.date_of_birth.before(&other.date_of_birth)
    }

    /// Days from birth to `on`; 0 on the day of birth, negative before it
    pub fn age_in_days(&self, on: &Date) -> i32 {
        on.day_count() - self.date_of_birth.day_count()
    }

    /// Minimum healthy weight in grams for the age, None outside 1..=365
    pub fn minimum_healthy_weight(&self, age_in_days: i32) -> Option<f64> {
        growth_curve::minimum_healthy_weight(self.birth_weight.to_grams(), age_in_days)
    }

    pub fn is_weight_in_valid_range(&self, age_in_days: i32) -> WeightStatus {
        let Some(floor) = self.minimum_healthy_weight(age_in_days) else {
            return WeightStatus::InvalidAge;
        };

        if (self.current_weight.to_grams() as f64) < floor {
            WeightStatus::Underweight
        } else {
            WeightStatus::Healthy
        }
    }

    pub fn weight_status_on(&self, on: &Date) -> WeightStatus {
        self.is_weight_in_valid_range(self.age_in_days(on))
    }
}

impl PartialEq for Baby {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Baby {}

impl fmt::Display for Baby {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {} {}", self.first_name, self.last_name)?;
        writeln!(f, "Id: {}", self.id)?;
        writeln!(f, "Date of Birth: {}", self.date_of_birth)?;
        writeln!(f, "Birth Weight: {}", self.birth_weight)?;
        writeln!(f, "Current Weight: {}", self.current_weight)
    }
}
