// backend/src/domain/commands.rs

//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed to callers. The IO layer maps the public DTOs defined in the
//! `shared` crate to these internal types.

pub mod babies {
    use crate::domain::models::date::Date;
    use crate::domain::models::weight::Weight;
    use shared::WeightStatus;

    /// Input for creating a baby. Values are raw and may still fall back.
    #[derive(Debug, Clone, PartialEq)]
    pub struct CreateBabyCommand {
        pub first_name: String,
        pub last_name: String,
        pub id: String,
        pub day: i32,
        pub month: i32,
        pub year: i32,
        pub birth_weight_grams: i32,
    }

    /// Result of checking a weight against the growth curve.
    #[derive(Debug, Clone, PartialEq)]
    pub struct WeightCheckResult {
        pub status: WeightStatus,
        pub age_in_days: i32,
        pub current_weight: Weight,
        pub minimum_healthy_grams: Option<f64>,
    }

    /// Result of comparing two babies.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct BabyComparison {
        pub same_baby: bool,
        pub twins: bool,
        pub heavier: bool,
        pub older: bool,
        pub days_apart: i32,
    }

    /// Result of applying a weight delta.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct WeightChangeResult {
        pub previous: Weight,
        pub current: Weight,
        pub applied: bool,
    }

    /// Age to evaluate a weight at.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum AgeQuery {
        Days(i32),
        On(Date),
    }
}
