//! Minimum healthy weight schedule for the first year.
//!
//! The schedule is split into five age brackets. The first week allows a
//! linear loss of up to 10% of the birth weight by day 7; every later bracket
//! starts from the previous bracket's floor at an anchor day and adds a fixed
//! number of grams per day. Floors are real-valued grams.
//!
//! | Bracket      | Days     | Anchor | Daily gain |
//! |--------------|----------|--------|------------|
//! | FirstWeek    | 1..=7    | -      | -          |
//! | TwoMonths    | 8..=60   | 7      | 30 g       |
//! | FourMonths   | 61..=120 | 60     | 25 g       |
//! | EightMonths  | 121..=241| 120    | 16 g       |
//! | Year         | 242..=365| 240    | 8 g        |

use std::ops::RangeInclusive;

pub const FIRST_DAY: i32 = 1;
pub const LAST_DAY: i32 = 365;

/// Share of the birth weight that may be lost during the first week
const FIRST_WEEK_LOSS_DIVISOR: f64 = 10.0;
const FIRST_WEEK_DAYS: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthBracket {
    FirstWeek,
    TwoMonths,
    FourMonths,
    EightMonths,
    Year,
}

/// Link from a bracket back to the bracket it continues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Continuation {
    pub previous: GrowthBracket,
    pub anchor_day: i32,
    pub daily_gain_grams: i32,
}

impl GrowthBracket {
    pub const ALL: [GrowthBracket; 5] = [
        GrowthBracket::FirstWeek,
        GrowthBracket::TwoMonths,
        GrowthBracket::FourMonths,
        GrowthBracket::EightMonths,
        GrowthBracket::Year,
    ];

    pub fn days(self) -> RangeInclusive<i32> {
        match self {
            GrowthBracket::FirstWeek => 1..=7,
            GrowthBracket::TwoMonths => 8..=60,
            GrowthBracket::FourMonths => 61..=120,
            GrowthBracket::EightMonths => 121..=241,
            GrowthBracket::Year => 242..=365,
        }
    }

    pub fn continuation(self) -> Option<Continuation> {
        let (previous, anchor_day, daily_gain_grams) = match self {
            GrowthBracket::FirstWeek => return None,
            GrowthBracket::TwoMonths => (GrowthBracket::FirstWeek, 7, 30),
            GrowthBracket::FourMonths => (GrowthBracket::TwoMonths, 60, 25),
            GrowthBracket::EightMonths => (GrowthBracket::FourMonths, 120, 16),
            // Anchored at 240 even though EightMonths runs through day 241
            GrowthBracket::Year => (GrowthBracket::EightMonths, 240, 8),
        };

        Some(Continuation {
            previous,
            anchor_day,
            daily_gain_grams,
        })
    }

    /// Bracket covering the age, None outside 1..=365
    pub fn for_age(age_in_days: i32) -> Option<GrowthBracket> {
        Self::ALL
            .into_iter()
            .find(|bracket| bracket.days().contains(&age_in_days))
    }

    /// This bracket's formula evaluated at `age_in_days`.
    ///
    /// The age is not checked against `days()`: anchors are evaluated with the
    /// previous bracket's formula even when they sit outside its range.
    pub fn floor(self, birth_weight_grams: i64, age_in_days: i32) -> f64 {
        match self.continuation() {
            None => {
                let birth = birth_weight_grams as f64;
                let daily_loss = birth / FIRST_WEEK_LOSS_DIVISOR / FIRST_WEEK_DAYS;
                birth - daily_loss * age_in_days as f64
            }
            Some(link) => {
                let base = link.previous.floor(birth_weight_grams, link.anchor_day);
                let days_in_bracket = (age_in_days - link.anchor_day) as i64;
                base + (days_in_bracket * link.daily_gain_grams as i64) as f64
            }
        }
    }
}

/// Minimum healthy weight in grams, None when the age is outside 1..=365
pub fn minimum_healthy_weight(birth_weight_grams: i64, age_in_days: i32) -> Option<f64> {
    GrowthBracket::for_age(age_in_days).map(|bracket| bracket.floor(birth_weight_grams, age_in_days))
}
