//! # Domain Module
//!
//! Contains the business logic for tracking a newborn's growth.
//!
//! ## Module Organization
//!
//! - **models**: `Date`, `Weight` and `Baby` value types
//! - **growth_curve**: Minimum healthy weight schedule for the first year
//! - **baby_service**: Creation, weight checks, weight updates and comparisons
//! - **commands**: Internal command and result types used by the service
//!
//! ## Business Rules
//!
//! - Invalid input never fails: dates fall back to 01/01/2024, weights to
//!   1 kg and ids to "000000000"
//! - Mutations that would break an invariant are ignored
//! - Dates are ordered and subtracted through their day count, never by
//!   comparing day/month/year fields
//! - A weight can only be evaluated for ages 1 through 365 days

pub mod baby_service;
pub mod commands;
pub mod growth_curve;
pub mod models;

pub use baby_service::*;
pub use commands::*;
