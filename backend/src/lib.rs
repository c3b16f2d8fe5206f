//! Newborn growth tracking: calendar dates, weights and the first-year
//! growth curve.

pub mod cli;
pub mod domain;
pub mod io;

pub use domain::models::{Baby, Date, DateParseError, Weight};
pub use domain::BabyService;
pub use shared::WeightStatus;
